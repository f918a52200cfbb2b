//! Scripted in-memory transport for accessor tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use rgwadmin_auth::Credentials;
use rgwadmin_http::{RawResponse, RequestOptions, Transport, TransportError};

use crate::client::AdminClient;
use crate::config::AdminConfig;

/// One request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: http::Method,
    pub path_and_query: String,
    pub authorization: Option<String>,
    pub date: Option<String>,
}

/// Replays scripted responses in order and records every request.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub(crate) fn call(&self, index: usize) -> RecordedCall {
        self.calls.lock()[index].clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|c| c.path_and_query.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: http::Request<Bytes>,
        _options: &RequestOptions,
    ) -> Result<RawResponse, TransportError> {
        let header = |name: http::header::HeaderName| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        self.calls.lock().push(RecordedCall {
            method: request.method().clone(),
            path_and_query: request
                .uri()
                .path_and_query()
                .map(ToString::to_string)
                .unwrap_or_default(),
            authorization: header(http::header::AUTHORIZATION),
            date: header(http::header::DATE),
        });

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_owned())))
    }
}

/// A client over a fresh [`MockTransport`] with the given script.
pub(crate) fn client_with(
    responses: Vec<Result<RawResponse, TransportError>>,
) -> (AdminClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new(responses));
    let client = AdminClient::with_transport(
        AdminConfig::builder().host("rgw.test".into()).build(),
        Credentials::new("AKID", "secret"),
        transport.clone(),
    );
    (client, transport)
}

/// A 200 response carrying `body`.
pub(crate) fn ok(body: &str) -> Result<RawResponse, TransportError> {
    Ok(RawResponse::new(http::StatusCode::OK, body))
}

/// An error response with a `{"Code": ...}` envelope.
pub(crate) fn failure(status: http::StatusCode, code: &str) -> Result<RawResponse, TransportError> {
    Ok(RawResponse::new(status, format!(r#"{{"Code":"{code}"}}"#)))
}
