//! Handler contract: the transformation applied to each invocation.

pub mod echo;
pub mod handler;

pub use echo::EchoHandler;
pub use handler::{Handler, HandlerError, InvocationContext};
