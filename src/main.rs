//! Ric bootstrap binary.
//!
//! Reads the Runtime API address from the environment and runs the
//! invocation loop with the greeting-and-echo handler.

use ric::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A missing address fails here, before any network call
    let config = RuntimeConfig::from_env()?;
    tracing::info!("Runtime API at {}", config.api_base());

    let handler = Arc::new(EchoHandler);
    let err = RuntimeLoop::new(config, handler).run().await;

    // The loop only returns with a fatal error; exit non-zero
    Err(err.into())
}
