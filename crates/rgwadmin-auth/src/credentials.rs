//! Access key credentials and signature variant selection.
//!
//! [`Credentials`] pairs an access key ID with its secret and the
//! [`SignatureVersion`] used to sign requests. Credentials are immutable once
//! built and are meant to be shared (behind an `Arc`) by every request issued
//! by a client.

use std::fmt;

use crate::error::SigningError;

/// Environment variables consulted for the access key ID, in order.
const ACCESS_KEY_VARS: &[&str] = &["AWS_ACCESS_KEY_ID", "EC2_ACCESS_KEY"];

/// Environment variables consulted for the secret access key, in order.
const SECRET_KEY_VARS: &[&str] = &["AWS_SECRET_ACCESS_KEY", "EC2_SECRET_KEY"];

/// Credential scope for SigV4 (`<date>/<region>/<service>/aws4_request`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    /// Region name placed in the credential scope.
    pub region: String,
    /// Service name placed in the credential scope.
    pub service: String,
}

impl SigningScope {
    /// Default region used by RADOS Gateway zonegroups that do not set one.
    pub const DEFAULT_REGION: &str = "us-east-1";
    /// The gateway signs admin requests as the `s3` service.
    pub const DEFAULT_SERVICE: &str = "s3";

    /// Create a scope for the given region and the `s3` service.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: Self::DEFAULT_SERVICE.to_owned(),
        }
    }
}

impl Default for SigningScope {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REGION)
    }
}

/// The signature algorithm used to authenticate requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignatureVersion {
    /// Legacy HMAC-SHA1 signing (`AWS <akid>:<sig>`).
    #[default]
    V2,
    /// HMAC-SHA256 signing with a date-scoped derived key.
    V4(SigningScope),
}

/// An access key pair plus the signature variant to sign with.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_key: String,
    version: SignatureVersion,
}

impl Credentials {
    /// Create SigV2 credentials from an access key pair.
    pub fn new(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
            version: SignatureVersion::V2,
        }
    }

    /// Return these credentials with a different signature variant.
    #[must_use]
    pub fn with_version(mut self, version: SignatureVersion) -> Self {
        self.version = version;
        self
    }

    /// Load the key pair from the environment.
    ///
    /// The access key is read from `AWS_ACCESS_KEY_ID`, falling back to
    /// `EC2_ACCESS_KEY`; the secret from `AWS_SECRET_ACCESS_KEY`, falling back
    /// to `EC2_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::MissingAccessKey`] or
    /// [`SigningError::MissingSecretKey`] when neither variable is set.
    pub fn from_env() -> Result<Self, SigningError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SigningError> {
        let access_key_id =
            first_of(ACCESS_KEY_VARS, &lookup).ok_or(SigningError::MissingAccessKey)?;
        let secret_key = first_of(SECRET_KEY_VARS, &lookup).ok_or(SigningError::MissingSecretKey)?;
        Ok(Self::new(access_key_id, secret_key))
    }

    /// The access key ID.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret access key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The signature variant.
    #[must_use]
    pub fn version(&self) -> &SignatureVersion {
        &self.version
    }

    /// Check that both halves of the key pair are present.
    ///
    /// # Errors
    ///
    /// Returns a [`SigningError`] naming the missing half.
    pub fn validate(&self) -> Result<(), SigningError> {
        if self.access_key_id.is_empty() {
            return Err(SigningError::MissingAccessKey);
        }
        if self.secret_key.is_empty() {
            return Err(SigningError::MissingSecretKey);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"<redacted>")
            .field("version", &self.version)
            .finish()
    }
}

/// The first non-empty value among `names`.
fn first_of(names: &[&str], lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    names
        .iter()
        .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_should_default_to_sigv2() {
        let creds = Credentials::new("AKID", "secret");
        assert_eq!(creds.version(), &SignatureVersion::V2);
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_should_reject_missing_access_key() {
        let creds = Credentials::new("", "secret");
        assert!(matches!(creds.validate(), Err(SigningError::MissingAccessKey)));
    }

    #[test]
    fn test_should_reject_missing_secret_key() {
        let creds = Credentials::new("AKID", "");
        assert!(matches!(creds.validate(), Err(SigningError::MissingSecretKey)));
    }

    #[test]
    fn test_should_switch_to_sigv4_scope() {
        let creds =
            Credentials::new("AKID", "secret").with_version(SignatureVersion::V4(SigningScope::new("eu-west-1")));
        let SignatureVersion::V4(scope) = creds.version() else {
            panic!("expected V4");
        };
        assert_eq!(scope.region, "eu-west-1");
        assert_eq!(scope.service, "s3");
    }

    #[test]
    fn test_should_redact_secret_in_debug_output() {
        let creds = Credentials::new("AKID", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKID"));
        assert!(!rendered.contains("super-secret"));
    }

    fn lookup_in(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name: &str| vars.get(name).map(|v| (*v).to_owned())
    }

    #[test]
    fn test_should_prefer_aws_variables() {
        let creds = Credentials::from_lookup(lookup_in(&[
            ("AWS_ACCESS_KEY_ID", "aws-akid"),
            ("AWS_SECRET_ACCESS_KEY", "aws-secret"),
            ("EC2_ACCESS_KEY", "ec2-akid"),
            ("EC2_SECRET_KEY", "ec2-secret"),
        ]))
        .unwrap();
        assert_eq!(creds.access_key_id(), "aws-akid");
        assert_eq!(creds.secret_key(), "aws-secret");
    }

    #[test]
    fn test_should_fall_back_to_ec2_variables() {
        let creds = Credentials::from_lookup(lookup_in(&[
            ("EC2_ACCESS_KEY", "ec2-akid"),
            ("EC2_SECRET_KEY", "ec2-secret"),
        ]))
        .unwrap();
        assert_eq!(creds.access_key_id(), "ec2-akid");
        assert_eq!(creds.secret_key(), "ec2-secret");
    }

    #[test]
    fn test_should_skip_empty_variables() {
        let creds = Credentials::from_lookup(lookup_in(&[
            ("AWS_ACCESS_KEY_ID", ""),
            ("EC2_ACCESS_KEY", "ec2-akid"),
            ("AWS_SECRET_ACCESS_KEY", "aws-secret"),
            ("EC2_SECRET_KEY", ""),
        ]))
        .unwrap();
        assert_eq!(creds.access_key_id(), "ec2-akid");
        assert_eq!(creds.secret_key(), "aws-secret");
    }

    #[test]
    fn test_should_report_which_half_is_missing_from_environment() {
        let err = Credentials::from_lookup(lookup_in(&[])).unwrap_err();
        assert!(matches!(err, SigningError::MissingAccessKey));

        let err = Credentials::from_lookup(lookup_in(&[("AWS_ACCESS_KEY_ID", "akid")])).unwrap_err();
        assert!(matches!(err, SigningError::MissingSecretKey));

        let err = Credentials::from_lookup(lookup_in(&[
            ("AWS_ACCESS_KEY_ID", "akid"),
            ("AWS_SECRET_ACCESS_KEY", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, SigningError::MissingSecretKey));
    }
}
