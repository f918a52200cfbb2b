//! Error types for request signing.
//!
//! Signing fails only on incomplete credentials or on values that cannot be
//! carried in an HTTP header. Both are detected before the request leaves the
//! process.

/// Errors that can occur while signing an admin request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The access key ID is empty or was not configured.
    #[error("missing access key id")]
    MissingAccessKey,

    /// The secret access key is empty or was not configured.
    #[error("missing secret access key")]
    MissingSecretKey,

    /// The request has neither a `Host` header nor an authority in its URI.
    #[error("request has no host to sign")]
    MissingHost,

    /// A computed header value contains bytes not allowed in HTTP headers.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}
