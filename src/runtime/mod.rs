//! The invocation loop and its Runtime API client.

mod client;
mod config;
mod error;
mod runner;

pub use client::RuntimeApiClient;
pub use config::{RuntimeConfig, API_VERSION, RUNTIME_API_ENV};
pub use error::RuntimeError;
pub use runner::RuntimeLoop;
