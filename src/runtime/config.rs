//! Runtime API client configuration.

use crate::runtime::RuntimeError;
use hyper::Uri;
use serde::{Deserialize, Serialize};

/// Environment variable supplying the Runtime API network location
/// (host or host:port).
pub const RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// Fixed version path segment of the Runtime API.
pub const API_VERSION: &str = "2018-06-01";

/// Configuration for the Runtime API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Network location of the Runtime API.
    pub host: String,
    /// Version path segment appended to the host.
    pub api_version: String,
}

impl RuntimeConfig {
    /// Create a config for the given Runtime API location.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// Set the API version path segment.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Fails before any network call when the variable is missing, empty, or
    /// does not form a valid base address.
    pub fn from_env() -> Result<Self, RuntimeError> {
        match std::env::var(RUNTIME_API_ENV) {
            Ok(host) if !host.is_empty() => Self::new(host).validated(),
            _ => Err(RuntimeError::configuration(format!(
                "{} is not set",
                RUNTIME_API_ENV
            ))),
        }
    }

    /// Base address of the Runtime API.
    pub fn api_base(&self) -> String {
        format!("http://{}/{}", self.host, self.api_version)
    }

    fn validated(self) -> Result<Self, RuntimeError> {
        match self.api_base().parse::<Uri>() {
            Ok(_) => Ok(self),
            Err(err) => Err(RuntimeError::configuration(format!(
                "invalid Runtime API address '{}': {}",
                self.host, err
            ))),
        }
    }
}
