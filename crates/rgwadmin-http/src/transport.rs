//! Transport seam.
//!
//! A [`Transport`] sends a signed `http::Request` and hands back the status,
//! reason and body. It does not interpret the status; HTTP-level failures are
//! classified by [`interpret`](crate::response::interpret).

use std::fmt;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

/// Per-request overrides passed through to the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overall timeout of one attempt.
    pub timeout: Option<Duration>,
    /// Extra attempts after a connect or timeout failure.
    pub retries: Option<u32>,
}

/// An HTTP response as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Status code.
    pub status: http::StatusCode,
    /// Reason phrase.
    pub reason: String,
    /// Body decoded as UTF-8.
    pub body: String,
}

impl RawResponse {
    /// Build a response with the canonical reason phrase of `status`.
    pub fn new(status: http::StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body: body.into(),
        }
    }
}

/// Network-level failures, distinct from errors reported by the gateway.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be turned into a wire request.
    #[error("failed to build request: {0}")]
    Build(String),
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),
    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` for failures worth another attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::Timeout)
    }
}

/// Sends signed admin requests.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send `request` and return the response, whatever its status.
    async fn execute(
        &self,
        request: http::Request<Bytes>,
        options: &RequestOptions,
    ) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn to_reqwest(
        parts: &http::request::Parts,
        body: &Bytes,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Request, TransportError> {
        let url = reqwest::Url::parse(&parts.uri.to_string())
            .map_err(|e| TransportError::Build(e.to_string()))?;
        let mut request = reqwest::Request::new(parts.method.clone(), url);
        *request.headers_mut() = parts.headers.clone();
        *request.body_mut() = Some(reqwest::Body::from(body.clone()));
        *request.timeout_mut() = timeout;
        Ok(request)
    }

    async fn attempt(&self, request: reqwest::Request) -> Result<RawResponse, TransportError> {
        let response = self.client.execute(request).await.map_err(classify)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse::new(status, body))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: http::Request<Bytes>,
        options: &RequestOptions,
    ) -> Result<RawResponse, TransportError> {
        let (parts, body) = request.into_parts();

        with_retries(options.retries.unwrap_or(0), |attempt| {
            let wire = Self::to_reqwest(&parts, &body, options.timeout);
            debug!(method = %parts.method, uri = %parts.uri, attempt, "Sending admin request");
            async move { self.attempt(wire?).await }
        })
        .await
    }
}

/// Run `send` once, then up to `retries` more times while it fails with a
/// retryable error.
async fn with_retries<F, Fut>(retries: u32, mut send: F) -> Result<RawResponse, TransportError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
{
    let mut attempt = 0;
    loop {
        match send(attempt).await {
            Err(e) if e.is_retryable() && attempt < retries => {
                attempt += 1;
                warn!(error = %e, attempt, retries, "Retrying admin request");
            }
            result => return result,
        }
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_builder() {
        TransportError::Build(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
