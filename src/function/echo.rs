//! The demonstration handler: greet and echo the request back.

use crate::function::{Handler, HandlerError, InvocationContext};
use crate::http::ResponseSink;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

/// Greeting-and-echo handler.
///
/// Produces a JSON object with a fixed greeting and the request payload
/// echoed back as text. Serialization goes through serde_json, so payloads
/// containing quotes or control characters stay valid JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(
        &self,
        payload: Bytes,
        sink: &mut ResponseSink,
        _ctx: &InvocationContext,
    ) -> Result<(), HandlerError> {
        let request = String::from_utf8_lossy(&payload);
        let body = json!({
            "hello": "world",
            "request": request,
        });
        sink.write(serde_json::to_vec(&body)?).await?;
        Ok(())
    }
}
