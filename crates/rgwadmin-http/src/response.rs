//! Response classification and JSON decoding.
//!
//! [`interpret`] is the single point where gateway responses become either a
//! payload or a typed [`AdminError`]. It never fails on a malformed body: a
//! non-200 response whose body is missing or unparseable still yields the
//! generic [`AdminErrorCode::Unknown`] error.

use rgwadmin_model::{AdminError, AdminErrorCode, AdminOperation};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::registry::ErrorRegistry;

/// The gateway's error envelope. Fields other than `Code` are optional.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

/// Failure to decode a successful response body.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {operation} response: {source}")]
pub struct DecodeError {
    /// The operation whose response was being decoded.
    pub operation: AdminOperation,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Classify a response.
///
/// - `200` with an empty body: `Ok(None)`.
/// - `200` with a body: `Ok(Some(body))`, for the caller to decode.
/// - anything else: the [`AdminError`] registered for the envelope's `Code`,
///   or the generic one.
///
/// # Errors
///
/// Returns an [`AdminError`] for every non-200 status.
pub fn interpret(
    status: http::StatusCode,
    reason: &str,
    body: &str,
    registry: &ErrorRegistry,
) -> Result<Option<String>, AdminError> {
    if status == http::StatusCode::OK {
        debug!(status = status.as_u16(), body_len = body.len(), "Admin request succeeded");
        return Ok((!body.is_empty()).then(|| body.to_owned()));
    }

    error!(status = status.as_u16(), reason, body, "Admin request failed");

    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let mut err = match envelope.as_ref().and_then(|e| e.code.as_deref()) {
        Some(code) => {
            let kind = registry.resolve(code).unwrap_or(AdminErrorCode::Unknown);
            AdminError::new(kind, status, reason).with_raw_code(code)
        }
        None => AdminError::unknown(status, reason),
    };

    if let Some(envelope) = envelope {
        if let Some(message) = envelope.message {
            err = err.with_message(message);
        }
        if let Some(request_id) = envelope.request_id {
            err = err.with_request_id(request_id);
        }
    }
    if !body.is_empty() {
        err = err.with_body(body);
    }
    Err(err)
}

/// Decode a JSON response body for `operation`.
///
/// # Errors
///
/// Returns a [`DecodeError`] if `body` does not match `T`.
pub fn decode_json<T: DeserializeOwned>(
    operation: AdminOperation,
    body: &str,
) -> Result<T, DecodeError> {
    serde_json::from_str(body).map_err(|source| DecodeError { operation, source })
}
