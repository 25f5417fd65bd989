//! HTTP client for the two Runtime API operations.

use crate::http::{
    Invocation, SinkBody, DEADLINE_MS_HEADER, FUNCTION_ARN_HEADER, REQUEST_ID_HEADER,
    TRACE_ID_HEADER,
};
use crate::runtime::{RuntimeConfig, RuntimeError};
use http_body_util::BodyExt;
use hyper::header::HeaderMap;
use hyper::{Method, Request, StatusCode};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

/// Client for the Runtime API consumed by the invocation loop.
pub struct RuntimeApiClient {
    http: Client<HttpConnector, SinkBody>,
    base: String,
}

impl RuntimeApiClient {
    /// Create a client for the configured Runtime API.
    pub fn new(config: &RuntimeConfig) -> Self {
        let http = Client::builder(TokioExecutor::new()).build_http();
        Self {
            http,
            base: config.api_base(),
        }
    }

    /// Base address this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetch the next invocation.
    ///
    /// Blocks until the host has work available; no client-side timeout is
    /// applied, the host manages its own long-poll window.
    pub async fn next_invocation(&self) -> Result<Invocation, RuntimeError> {
        let uri = format!("{}/runtime/invocation/next", self.base);
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(SinkBody::empty())
            .map_err(|err| RuntimeError::protocol(err.to_string()))?;

        let response = self.http.request(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RuntimeError::protocol(format!(
                "next invocation returned status {}",
                status.as_u16()
            )));
        }

        let request_id = header_str(response.headers(), REQUEST_ID_HEADER).ok_or_else(|| {
            RuntimeError::protocol(format!(
                "next invocation response is missing the {} header",
                REQUEST_ID_HEADER
            ))
        })?;
        let deadline_ms =
            header_str(response.headers(), DEADLINE_MS_HEADER).and_then(|v| v.parse().ok());
        let invoked_function_arn = header_str(response.headers(), FUNCTION_ARN_HEADER);
        let trace_id = header_str(response.headers(), TRACE_ID_HEADER);

        let payload = response.into_body().collect().await?.to_bytes();
        debug!("Fetched invocation {} ({} bytes)", request_id, payload.len());

        let mut invocation = Invocation::new(request_id, payload);
        invocation.deadline_ms = deadline_ms;
        invocation.invoked_function_arn = invoked_function_arn;
        invocation.trace_id = trace_id;
        Ok(invocation)
    }

    /// Report the response for an invocation, streaming `body` as it is
    /// produced. Returns the host's status code.
    pub async fn report_response(
        &self,
        request_id: &str,
        body: SinkBody,
    ) -> Result<StatusCode, RuntimeError> {
        let uri = format!("{}/runtime/invocation/{}/response", self.base, request_id);
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(body)
            .map_err(|err| RuntimeError::protocol(err.to_string()))?;

        let response = self.http.request(request).await?;
        let status = response.status();

        // Drain the acknowledgment body so the connection is released before
        // the next cycle.
        if let Err(err) = response.into_body().collect().await {
            debug!(
                "Error draining report acknowledgment for invocation {}: {}",
                request_id, err
            );
        }

        Ok(status)
    }
}

/// Read a header as an owned string, if present and valid UTF-8.
fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
