//! The invocation loop.

use crate::function::Handler;
use crate::http::ResponseSink;
use crate::runtime::{RuntimeApiClient, RuntimeConfig, RuntimeError};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Drives an unbounded sequence of invocation cycles against the Runtime
/// API.
///
/// Exactly one invocation is in flight at any time; a cycle only begins once
/// the previous invocation's response has been fully reported. The loop has
/// no terminal state under normal operation — [`RuntimeLoop::run`] returns
/// only with the fatal error that stopped it.
pub struct RuntimeLoop {
    /// Runtime API client.
    client: RuntimeApiClient,
    /// Singleton handler, shared across all invocations.
    handler: Arc<dyn Handler>,
}

impl RuntimeLoop {
    /// Create a loop against the configured Runtime API.
    pub fn new(config: RuntimeConfig, handler: Arc<dyn Handler>) -> Self {
        Self {
            client: RuntimeApiClient::new(&config),
            handler,
        }
    }

    /// Poll for invocations until a fatal error occurs.
    pub async fn run(self) -> RuntimeError {
        info!("Invocation loop polling {}", self.client.base());
        loop {
            if let Err(err) = self.cycle().await {
                error!("Invocation loop terminated: {}", err);
                return err;
            }
        }
    }

    /// Run one invocation cycle: fetch, handle, report.
    async fn cycle(&self) -> Result<(), RuntimeError> {
        // May block indefinitely; the host holds the call open until work is
        // available.
        let invocation = self.client.next_invocation().await?;

        let ctx = invocation.context();
        let payload = invocation.payload.clone();
        let handler = self.handler.clone();
        let (mut sink, body) = ResponseSink::channel();

        // The reporting POST and the handler run joined on this task, so
        // handler output streams straight into the request body.
        let report = self.client.report_response(&invocation.request_id, body);
        let produce = async move {
            if let Err(err) = handler.handle(payload, &mut sink, &ctx).await {
                warn!("Handler failed for invocation {}: {}", ctx.request_id, err);
                if sink.is_empty() {
                    // Nothing streamed yet: report the failure as a
                    // structured document instead of an empty body.
                    if let Err(write_err) = sink.write(err.to_document().to_string()).await {
                        warn!(
                            "Could not report handler error for invocation {}: {}",
                            ctx.request_id, write_err
                        );
                    }
                } else {
                    warn!(
                        "Invocation {} already streamed {} bytes, finishing response as is",
                        ctx.request_id,
                        sink.bytes_written()
                    );
                }
            }
            // Dropping the sink ends the body stream and finalizes the POST.
        };

        let (status, ()) = tokio::join!(report, produce);
        let status = status?;

        if status.as_u16() >= 300 {
            return Err(RuntimeError::report_rejected(
                &invocation.request_id,
                status.as_u16(),
            ));
        }

        debug!(
            "Invocation {} reported (status {})",
            invocation.request_id,
            status.as_u16()
        );
        Ok(())
    }
}
