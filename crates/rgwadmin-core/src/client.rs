//! The admin client.
//!
//! [`AdminClient`] owns the configuration, the credentials, the transport and
//! the error registry. Resource accessors are implemented in the
//! [`crate::ops`] submodules; each builds an [`AdminRequest`] and runs it
//! through [`AdminClient::send`]: sign, execute, interpret.

use std::sync::Arc;

use chrono::Utc;
use rgwadmin_auth::Credentials;
use rgwadmin_http::{
    AdminRequest, AdminRequestBuilder, ErrorRegistry, ReqwestTransport, Transport, decode_json,
    interpret,
};
use rgwadmin_model::AdminOperation;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AdminConfig;
use crate::error::{AdminClientError, AdminResult};

/// Client for the gateway admin API.
///
/// All fields are `Arc`-wrapped; clones are cheap and share everything, so
/// one client can serve many concurrent tasks.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::Credentials;
/// use rgwadmin_core::{AdminClient, config::AdminConfig};
///
/// let client = AdminClient::new(
///     AdminConfig::builder().host("rgw.example.com".into()).build(),
///     Credentials::new("AKID", "secret"),
/// );
/// assert_eq!(client.admin_path(), "/admin");
/// ```
#[derive(Debug, Clone)]
pub struct AdminClient {
    config: Arc<AdminConfig>,
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
    registry: Arc<ErrorRegistry>,
}

impl AdminClient {
    /// Create a client using the reqwest transport.
    #[must_use]
    pub fn new(config: AdminConfig, credentials: Credentials) -> Self {
        Self::with_transport(config, credentials, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(
        config: AdminConfig,
        credentials: Credentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            transport,
            registry: Arc::new(ErrorRegistry::default()),
        }
    }

    /// Replace the error-code registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ErrorRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// The admin path prefix.
    #[must_use]
    pub fn admin_path(&self) -> &str {
        &self.config.admin_path
    }

    /// The credentials requests are signed with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Start a request for `operation` with the configured falsy handling.
    pub(crate) fn request(&self, operation: AdminOperation) -> AdminRequestBuilder {
        AdminRequest::builder(operation).falsy_params(self.config.falsy_params)
    }

    /// Sign, send and interpret a request.
    ///
    /// Returns `None` when the gateway answered 200 with an empty body.
    pub(crate) async fn send(&self, request: AdminRequest) -> AdminResult<Option<String>> {
        let operation = request.operation;
        let http_request = request
            .into_http(&self.config.endpoint())
            .map_err(|e| AdminClientError::Config(e.to_string()))?;

        let (mut parts, body) = http_request.into_parts();
        rgwadmin_auth::sign(&mut parts, &body, &self.credentials, Utc::now())?;
        debug!(%operation, method = %parts.method, uri = %parts.uri, "Dispatching admin request");

        let response = self
            .transport
            .execute(
                http::Request::from_parts(parts, body),
                &self.config.request_options(),
            )
            .await?;

        Ok(interpret(
            response.status,
            &response.reason,
            &response.body,
            &self.registry,
        )?)
    }

    /// Send a request whose response is a JSON document.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: AdminRequest) -> AdminResult<T> {
        let operation = request.operation;
        let body = self
            .send(request)
            .await?
            .ok_or(AdminClientError::MissingBody(operation))?;
        Ok(decode_json(operation, &body)?)
    }

    /// Send a request whose success is signalled by an empty body.
    pub(crate) async fn execute(&self, request: AdminRequest) -> AdminResult<bool> {
        debug_assert!(
            request.operation.expects_empty_body(),
            "{} answers with a document",
            request.operation
        );
        Ok(self.send(request).await?.is_none())
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rgwadmin_http::{RawResponse, TransportError};
    use rgwadmin_model::AdminErrorCode;

    use super::*;
    use crate::testing::{MockTransport, client_with};

    #[tokio::test]
    async fn test_should_sign_every_request() {
        let (client, transport) = client_with(vec![Ok(RawResponse::new(StatusCode::OK, ""))]);
        let request = client.request(AdminOperation::RemoveUser).mandatory("uid", "alice").build();

        assert!(client.execute(request).await.unwrap());
        let call = transport.call(0);
        assert_eq!(call.method, http::Method::DELETE);
        assert_eq!(call.path_and_query, "/admin/user?uid=alice");
        assert!(call.authorization.unwrap().starts_with("AWS AKID:"));
        assert!(call.date.is_some());
    }

    #[tokio::test]
    async fn test_should_fail_before_transport_on_incomplete_credentials() {
        let transport = Arc::new(MockTransport::new(vec![]));
        let client = AdminClient::with_transport(
            AdminConfig::default(),
            Credentials::new("AKID", ""),
            transport.clone(),
        );
        let request = client.request(AdminOperation::GetUser).mandatory("uid", "alice").build();

        let err = client.send(request).await.unwrap_err();
        assert!(matches!(err, AdminClientError::Signing(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_should_surface_transport_failures_distinctly() {
        let (client, _) = client_with(vec![Err(TransportError::Connect("refused".to_owned()))]);
        let request = client.request(AdminOperation::GetUsage).format_json().build();

        let err = client.send(request).await.unwrap_err();
        assert!(matches!(err, AdminClientError::Transport(TransportError::Connect(_))));
        assert_eq!(err.admin_code(), None);
    }

    #[tokio::test]
    async fn test_should_report_missing_body_for_document_operations() {
        let (client, _) = client_with(vec![Ok(RawResponse::new(StatusCode::OK, ""))]);
        let request = client.request(AdminOperation::GetUser).mandatory("uid", "x").build();

        let err = client.fetch::<serde_json::Value>(request).await.unwrap_err();
        assert!(matches!(err, AdminClientError::MissingBody(AdminOperation::GetUser)));
    }

    #[tokio::test]
    async fn test_should_report_non_empty_body_as_false_for_empty_body_operations() {
        let (client, _) = client_with(vec![Ok(RawResponse::new(StatusCode::OK, "{}"))]);
        let request = client.request(AdminOperation::UnlinkBucket).build();
        assert!(!client.execute(request).await.unwrap());
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    #[should_panic(expected = "answers with a document")]
    async fn test_should_reject_document_operation_in_execute() {
        let (client, _) = client_with(vec![Ok(RawResponse::new(StatusCode::OK, ""))]);
        let request = client.request(AdminOperation::GetUser).mandatory("uid", "alice").build();
        let _ = client.execute(request).await;
    }

    #[tokio::test]
    async fn test_should_classify_with_custom_registry() {
        let (client, _) = client_with(vec![Ok(RawResponse::new(
            StatusCode::FORBIDDEN,
            r#"{"Code":"QuotaExceeded"}"#,
        ))]);
        let mut registry = ErrorRegistry::default();
        registry.register_custom("QuotaExceeded");
        let client = client.with_registry(registry);

        let request = client.request(AdminOperation::CreateKey).build();
        let err = client.send(request).await.unwrap_err();
        assert!(err.is_code(AdminErrorCode::Custom("QuotaExceeded")));
    }
}
