//! Handler trait, invocation context and handler error type.

use crate::http::ResponseSink;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

/// Per-invocation context passed to the handler.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// Correlation id of the invocation being handled.
    pub request_id: String,
    /// Invocation deadline in epoch milliseconds, when the host provides it.
    pub deadline_ms: Option<u64>,
    /// ARN of the invoked function, when the host provides it.
    pub invoked_function_arn: Option<String>,
    /// Trace id of the invocation, when the host provides it.
    pub trace_id: Option<String>,
}

impl InvocationContext {
    /// Create a new invocation context.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline_ms: None,
            invoked_function_arn: None,
            trace_id: None,
        }
    }
}

/// Handler trait for producing an invocation response.
///
/// A handler is a pure transformation from request payload to response
/// bytes, written directly into the provided sink. One handler instance is
/// constructed at startup and reused for every invocation; invocations are
/// strictly sequential, so no internal synchronization is needed.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Produce the response for one invocation.
    ///
    /// The payload may be any byte sequence, including empty. The written
    /// bytes must form a response body the host accepts; no side effects
    /// beyond writing to the sink.
    async fn handle(
        &self,
        payload: Bytes,
        sink: &mut ResponseSink,
        ctx: &InvocationContext,
    ) -> Result<(), HandlerError>;
}

/// Handler error type.
#[derive(Debug, Clone)]
pub struct HandlerError {
    /// Machine-readable error classification.
    pub error_type: String,
    /// Error message.
    pub message: String,
}

impl HandlerError {
    /// Create a new HandlerError.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_type: "HandlerError".to_string(),
            message: message.into(),
        }
    }

    /// Create a HandlerError with a specific error type.
    pub fn with_type(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    /// Render the error as the structured document reported to the host in
    /// place of a response body.
    pub fn to_document(&self) -> serde_json::Value {
        json!({
            "errorType": self.error_type,
            "errorMessage": self.message,
        })
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_type, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<std::io::Error> for HandlerError {
    fn from(err: std::io::Error) -> Self {
        HandlerError::with_type("IoError", err.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::with_type("SerializationError", err.to_string())
    }
}
