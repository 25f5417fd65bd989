//! One unit of work fetched from the Runtime API.

use crate::function::InvocationContext;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Header carrying the correlation id of an invocation. Mandatory on every
/// fetch response.
pub const REQUEST_ID_HEADER: &str = "Lambda-Runtime-Aws-Request-Id";

/// Header carrying the invocation deadline as epoch milliseconds.
pub const DEADLINE_MS_HEADER: &str = "Lambda-Runtime-Deadline-Ms";

/// Header carrying the ARN of the function being invoked.
pub const FUNCTION_ARN_HEADER: &str = "Lambda-Runtime-Invoked-Function-Arn";

/// Header carrying the tracing id of the invocation.
pub const TRACE_ID_HEADER: &str = "Lambda-Runtime-Trace-Id";

/// One invocation fetched from the host.
///
/// Created when the fetch call returns, consumed by exactly one handler
/// call, and discarded once its response has been reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// Correlation id supplied by the host. The report for this invocation
    /// must be posted under exactly this id.
    pub request_id: String,
    /// Raw request body.
    pub payload: Bytes,
    /// Invocation deadline in epoch milliseconds, when the host provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
    /// ARN of the invoked function, when the host provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoked_function_arn: Option<String>,
    /// Trace id of the invocation, when the host provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Invocation {
    /// Create a new invocation.
    pub fn new(request_id: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            request_id: request_id.into(),
            payload: payload.into(),
            deadline_ms: None,
            invoked_function_arn: None,
            trace_id: None,
        }
    }

    /// Set the deadline.
    pub fn deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    /// Set the invoked function ARN.
    pub fn invoked_function_arn(mut self, arn: impl Into<String>) -> Self {
        self.invoked_function_arn = Some(arn.into());
        self
    }

    /// Set the trace id.
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Get the payload as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).to_string()
    }

    /// Parse the payload as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Build the context handed to the handler for this invocation.
    pub fn context(&self) -> InvocationContext {
        InvocationContext {
            request_id: self.request_id.clone(),
            deadline_ms: self.deadline_ms,
            invoked_function_arn: self.invoked_function_arn.clone(),
            trace_id: self.trace_id.clone(),
        }
    }
}
