//! Signature variant dispatch.

use chrono::{DateTime, Utc};
use http::header::{HeaderName, HeaderValue};

use crate::credentials::{Credentials, SignatureVersion};
use crate::error::SigningError;
use crate::sigv2::sign_v2;
use crate::sigv4::{hash_payload, sign_v4};

/// Sign a request with the variant selected by `credentials`.
///
/// Credentials are validated before anything is written to `parts`, so an
/// incomplete key pair never produces a half-signed request.
///
/// # Errors
///
/// Returns a [`SigningError`] if the credentials are incomplete or a computed
/// header cannot be represented.
pub fn sign(
    parts: &mut http::request::Parts,
    payload: &[u8],
    credentials: &Credentials,
    now: DateTime<Utc>,
) -> Result<(), SigningError> {
    credentials.validate()?;

    match credentials.version() {
        SignatureVersion::V2 => sign_v2(parts, credentials, now),
        SignatureVersion::V4(scope) => {
            sign_v4(parts, &hash_payload(payload), credentials, scope, now)
        }
    }
}

/// Insert (replacing) a header on the request parts.
pub(crate) fn set_header(
    parts: &mut http::request::Parts,
    name: HeaderName,
    value: &str,
) -> Result<(), SigningError> {
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| SigningError::InvalidHeaderValue(name.as_str().to_owned()))?;
    parts.headers.insert(name, header_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::credentials::SigningScope;

    fn parts() -> http::request::Parts {
        http::Request::builder()
            .method("GET")
            .uri("https://rgw.example.com/admin/usage?format=json")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_should_dispatch_to_sigv2() {
        let creds = Credentials::new("AKID", "secret");
        let mut p = parts();
        sign(&mut p, b"", &creds, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).unwrap();
        let auth = p.headers.get(http::header::AUTHORIZATION).unwrap().to_str().unwrap();
        assert!(auth.starts_with("AWS AKID:"));
    }

    #[test]
    fn test_should_dispatch_to_sigv4() {
        let creds =
            Credentials::new("AKID", "secret").with_version(SignatureVersion::V4(SigningScope::default()));
        let mut p = parts();
        sign(&mut p, b"", &creds, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).unwrap();
        let auth = p.headers.get(http::header::AUTHORIZATION).unwrap().to_str().unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKID/20240101/us-east-1/s3/aws4_request"));
    }

    #[test]
    fn test_should_leave_request_untouched_on_missing_key() {
        let creds = Credentials::new("", "secret");
        let mut p = parts();
        let result = sign(&mut p, b"", &creds, Utc::now());
        assert!(matches!(result, Err(SigningError::MissingAccessKey)));
        assert!(p.headers.is_empty());
    }
}
