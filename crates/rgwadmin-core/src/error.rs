//! Client error type.

use rgwadmin_auth::SigningError;
use rgwadmin_http::{DecodeError, TransportError};
use rgwadmin_model::{AdminError, AdminErrorCode, AdminOperation};

/// Everything an admin call can fail with.
///
/// Gateway-reported failures are [`AdminClientError::Admin`]; network failures
/// are [`AdminClientError::Transport`] and never carry an admin error code.
#[derive(Debug, thiserror::Error)]
pub enum AdminClientError {
    /// The request could not be signed. Nothing was sent.
    #[error("failed to sign request: {0}")]
    Signing(#[from] SigningError),

    /// The request did not reach the gateway or the response was lost.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The gateway rejected the request.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// A successful response did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A successful response that should carry a document was empty.
    #[error("{0} response had no body")]
    MissingBody(AdminOperation),

    /// The client configuration cannot address the gateway.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AdminClientError {
    /// The gateway error code, if the gateway reported the failure.
    #[must_use]
    pub fn admin_code(&self) -> Option<AdminErrorCode> {
        match self {
            Self::Admin(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the gateway reported `code`.
    #[must_use]
    pub fn is_code(&self, code: AdminErrorCode) -> bool {
        self.admin_code() == Some(code)
    }
}

/// Result alias for admin calls.
pub type AdminResult<T> = Result<T, AdminClientError>;
