//! Admin API error types.
//!
//! The gateway reports failures with a non-200 status and a JSON envelope whose
//! `Code` field names the error, for example `{"Code": "NoSuchUser"}`. Other
//! envelope fields (`Message`, `RequestId`, ...) are carried through verbatim.

use std::fmt;

/// Error codes the gateway is known to return from admin operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AdminErrorCode {
    /// Access was denied for the request.
    AccessDenied,
    /// Attempt to create an existing user.
    UserExists,
    /// Invalid access key specified.
    InvalidAccessKey,
    /// Invalid key type specified.
    InvalidKeyType,
    /// Invalid secret key specified.
    InvalidSecretKey,
    /// Provided access key already exists.
    KeyExists,
    /// Provided email address already exists.
    EmailExists,
    /// Specified subuser already exists.
    SubuserExists,
    /// Invalid subuser access specified.
    InvalidAccess,
    /// Bucket index repair failed.
    IndexRepairFailed,
    /// Attempted to delete a non-empty bucket.
    BucketNotEmpty,
    /// Unable to remove objects.
    ObjectRemovalFailed,
    /// Unable to unlink bucket from the specified user.
    BucketUnlinkFailed,
    /// Unable to link bucket to the specified user.
    BucketLinkFailed,
    /// Specified object does not exist.
    NoSuchObject,
    /// Unable to parse the request body.
    IncompleteBody,
    /// Attempt to grant an invalid capability.
    InvalidCap,
    /// User does not possess the specified capability.
    NoSuchCap,
    /// Internal server error.
    InternalError,
    /// Specified user does not exist.
    NoSuchUser,
    /// Specified bucket does not exist.
    NoSuchBucket,
    /// Specified key does not exist. Also returned for users without usage stats.
    NoSuchKey,
    /// A code registered by the caller at runtime.
    Custom(&'static str),
    /// The generic fallback for unregistered codes and unparseable bodies.
    #[default]
    Unknown,
}

impl AdminErrorCode {
    /// Every built-in registered code, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::AccessDenied,
        Self::UserExists,
        Self::InvalidAccessKey,
        Self::InvalidKeyType,
        Self::InvalidSecretKey,
        Self::KeyExists,
        Self::EmailExists,
        Self::SubuserExists,
        Self::InvalidAccess,
        Self::IndexRepairFailed,
        Self::BucketNotEmpty,
        Self::ObjectRemovalFailed,
        Self::BucketUnlinkFailed,
        Self::BucketLinkFailed,
        Self::NoSuchObject,
        Self::IncompleteBody,
        Self::InvalidCap,
        Self::NoSuchCap,
        Self::InternalError,
        Self::NoSuchUser,
        Self::NoSuchBucket,
        Self::NoSuchKey,
    ];

    /// Returns the wire code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDenied => "AccessDenied",
            Self::UserExists => "UserExists",
            Self::InvalidAccessKey => "InvalidAccessKey",
            Self::InvalidKeyType => "InvalidKeyType",
            Self::InvalidSecretKey => "InvalidSecretKey",
            Self::KeyExists => "KeyExists",
            Self::EmailExists => "EmailExists",
            Self::SubuserExists => "SubuserExists",
            Self::InvalidAccess => "InvalidAccess",
            Self::IndexRepairFailed => "IndexRepairFailed",
            Self::BucketNotEmpty => "BucketNotEmpty",
            Self::ObjectRemovalFailed => "ObjectRemovalFailed",
            Self::BucketUnlinkFailed => "BucketUnlinkFailed",
            Self::BucketLinkFailed => "BucketLinkFailed",
            Self::NoSuchObject => "NoSuchObject",
            Self::IncompleteBody => "IncompleteBody",
            Self::InvalidCap => "InvalidCap",
            Self::NoSuchCap => "NoSuchCap",
            Self::InternalError => "InternalError",
            Self::NoSuchUser => "NoSuchUser",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchKey => "NoSuchKey",
            Self::Custom(code) => code,
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a built-in wire code. Custom codes are resolved by a registry.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for AdminErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure reported by the gateway for an admin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminError {
    /// The classified error code.
    pub code: AdminErrorCode,
    /// The `Code` string from the envelope, when one was present.
    pub raw_code: Option<String>,
    /// The HTTP status of the response.
    pub status: http::StatusCode,
    /// The HTTP reason phrase of the response.
    pub reason: String,
    /// The envelope `Message`, if any.
    pub message: Option<String>,
    /// The envelope `RequestId`, if any.
    pub request_id: Option<String>,
    /// The raw response body, kept for diagnostics.
    pub body: Option<String>,
}

impl AdminError {
    /// Create an error for a classified code.
    #[must_use]
    pub fn new(code: AdminErrorCode, status: http::StatusCode, reason: impl Into<String>) -> Self {
        Self {
            code,
            raw_code: None,
            status,
            reason: reason.into(),
            message: None,
            request_id: None,
            body: None,
        }
    }

    /// Create the generic fallback error.
    #[must_use]
    pub fn unknown(status: http::StatusCode, reason: impl Into<String>) -> Self {
        Self::new(AdminErrorCode::Unknown, status, reason)
    }

    /// Set the envelope code string.
    #[must_use]
    pub fn with_raw_code(mut self, raw_code: impl Into<String>) -> Self {
        self.raw_code = Some(raw_code.into());
        self
    }

    /// Set the envelope message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the envelope request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach the raw response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The code as reported on the wire, or the classified code's name.
    #[must_use]
    pub fn code_str(&self) -> &str {
        self.raw_code.as_deref().unwrap_or_else(|| self.code.as_str())
    }

    /// Returns `true` if this error carries the given code.
    #[must_use]
    pub fn is(&self, code: AdminErrorCode) -> bool {
        self.code == code
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.code_str(),
            self.status.as_u16(),
            self.reason
        )
    }
}

impl std::error::Error for AdminError {}
