//! # Ric - Runtime Interface Client
//!
//! Ric is a Rust-based Runtime Interface Client (RIC) for AWS Lambda custom
//! function runtimes. It drives the Lambda Runtime API polling cycle: fetch
//! the next invocation, run a user-provided handler, and stream the handler's
//! output back to the host under the invocation's request id.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Lambda Execution Environment                    │
//! │                  (Runtime API, invocation queueing)                 │
//! └─────────────────────────────────────────────────────────────────────┘
//!        │ GET /runtime/invocation/next          ▲ POST .../response
//!        ▼                                       │
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    RIC (Runtime Interface Client)                   │
//! │  ┌───────────────┐   ┌──────────────────┐   ┌───────────────────┐  │
//! │  │  RuntimeLoop  │──▶│     Handler      │──▶│   ResponseSink    │  │
//! │  │  (one cycle   │   │ (payload → body) │   │ (streamed report  │  │
//! │  │  in flight)   │   │                  │   │  request body)    │  │
//! │  └───────────────┘   └──────────────────┘   └───────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ric::prelude::*;
//! use std::sync::Arc;
//!
//! // Define a custom handler
//! struct UppercaseHandler;
//!
//! #[async_trait]
//! impl Handler for UppercaseHandler {
//!     async fn handle(
//!         &self,
//!         payload: Bytes,
//!         sink: &mut ResponseSink,
//!         _ctx: &InvocationContext,
//!     ) -> Result<(), HandlerError> {
//!         sink.write(payload.to_ascii_uppercase()).await?;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Host address comes from AWS_LAMBDA_RUNTIME_API
//!     let config = RuntimeConfig::from_env()?;
//!
//!     // Run the invocation loop; it only returns with a fatal error
//!     let err = RuntimeLoop::new(config, Arc::new(UppercaseHandler)).run().await;
//!     Err(err.into())
//! }
//! ```
//!
//! ## Invocation Lifecycle
//!
//! Each cycle processes exactly one invocation, strictly in the order the
//! host supplies them:
//!
//! 1. **Fetch** (`GET /runtime/invocation/next`): blocks until the host has
//!    work; the `Lambda-Runtime-Aws-Request-Id` header correlates the
//!    invocation with its eventual report.
//! 2. **Run**: the handler writes its response into a [`ResponseSink`] that
//!    streams directly into the reporting request body.
//! 3. **Report** (`POST /runtime/invocation/{requestId}/response`): a status
//!    of 300 or above is fatal and stops the loop — re-reporting against a
//!    stale request id is a protocol violation.
//!
//! Handler failures never abort the loop: if nothing was streamed yet, the
//! loop reports a structured JSON error document in place of the response.

pub mod function;
pub mod http;
pub mod runtime;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::function::{EchoHandler, Handler, HandlerError, InvocationContext};
    pub use crate::http::{Invocation, ResponseSink, SinkBody};
    pub use crate::runtime::{RuntimeConfig, RuntimeError, RuntimeLoop};
    pub use async_trait::async_trait;
    pub use bytes::Bytes;
}

// Re-export for convenience
pub use function::{EchoHandler, Handler, HandlerError, InvocationContext};
pub use http::{Invocation, ResponseSink, SinkBody};
pub use runtime::{RuntimeApiClient, RuntimeConfig, RuntimeError, RuntimeLoop};
