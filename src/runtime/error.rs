//! Fatal error taxonomy of the invocation loop.

/// Errors that terminate the invocation loop (or keep it from starting).
///
/// Handler failures are not part of this taxonomy: they are contained at the
/// handler boundary and never abort the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Required host address missing or unusable at startup. The loop is
    /// never entered.
    Configuration(String),
    /// The host's response could not be interpreted: bad status on fetch, or
    /// the correlation id header is absent. The invocation cannot be safely
    /// correlated, so no report is attempted.
    Protocol(String),
    /// The host refused a reported response. Not retried: the contract
    /// guarantees single delivery per invocation, and re-reporting against a
    /// stale request id would misattribute the result.
    ReportRejected {
        /// Id of the invocation whose report was refused.
        request_id: String,
        /// Status code the host answered with.
        status: u16,
    },
    /// Transport failure while talking to the host during fetch or report.
    Transport(String),
}

impl RuntimeError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        RuntimeError::Configuration(message.into())
    }

    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        RuntimeError::Protocol(message.into())
    }

    /// Create a report-rejected error.
    pub fn report_rejected(request_id: impl Into<String>, status: u16) -> Self {
        RuntimeError::ReportRejected {
            request_id: request_id.into(),
            status,
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        RuntimeError::Transport(message.into())
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::Configuration(message) => write!(f, "configuration: {}", message),
            RuntimeError::Protocol(message) => write!(f, "protocol: {}", message),
            RuntimeError::ReportRejected { request_id, status } => write!(
                f,
                "host rejected report for invocation {} with status {}",
                request_id, status
            ),
            RuntimeError::Transport(message) => write!(f, "transport: {}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<hyper::Error> for RuntimeError {
    fn from(err: hyper::Error) -> Self {
        RuntimeError::transport(err.to_string())
    }
}

impl From<hyper_util::client::legacy::Error> for RuntimeError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        RuntimeError::transport(err.to_string())
    }
}
