//! Admin operation catalogue.
//!
//! Every admin endpoint is addressed by an HTTP method, a resource path below
//! the admin prefix, and optionally a value-less sub-resource selector in the
//! query string (`PUT /admin/user?key`).

use std::fmt;

/// All supported admin operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminOperation {
    // Usage
    /// Read bandwidth and operation usage.
    GetUsage,
    /// Remove usage log entries.
    TrimUsage,

    // Users
    /// Enumerate all user ids.
    ListUsers,
    /// Read one user.
    GetUser,
    /// Create a user.
    CreateUser,
    /// Modify an existing user.
    ModifyUser,
    /// Remove a user.
    RemoveUser,

    // Subusers
    /// Create a subuser.
    CreateSubuser,
    /// Modify a subuser.
    ModifySubuser,
    /// Remove a subuser.
    RemoveSubuser,

    // Keys
    /// Create or generate an access key.
    CreateKey,
    /// Remove an access key.
    RemoveKey,

    // Capabilities
    /// Grant administrative capabilities.
    AddCapability,
    /// Revoke administrative capabilities.
    RemoveCapability,

    // Buckets
    /// Enumerate all bucket names.
    ListBuckets,
    /// Read one bucket, or the buckets of one user.
    GetBucket,
    /// Check and optionally repair a bucket index.
    CheckBucketIndex,
    /// Remove a bucket.
    RemoveBucket,
    /// Link a bucket to a user.
    LinkBucket,
    /// Unlink a bucket from its owner.
    UnlinkBucket,
    /// Remove one object from a bucket.
    RemoveObject,
    /// Read a bucket or object policy.
    GetPolicy,

    // Quotas
    /// Read a user or bucket-scope quota.
    GetQuota,
    /// Set a user or bucket-scope quota.
    SetQuota,
    /// Set the quota of one bucket.
    SetBucketQuota,
}

impl AdminOperation {
    /// Returns the operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetUsage => "GetUsage",
            Self::TrimUsage => "TrimUsage",
            Self::ListUsers => "ListUsers",
            Self::GetUser => "GetUser",
            Self::CreateUser => "CreateUser",
            Self::ModifyUser => "ModifyUser",
            Self::RemoveUser => "RemoveUser",
            Self::CreateSubuser => "CreateSubuser",
            Self::ModifySubuser => "ModifySubuser",
            Self::RemoveSubuser => "RemoveSubuser",
            Self::CreateKey => "CreateKey",
            Self::RemoveKey => "RemoveKey",
            Self::AddCapability => "AddCapability",
            Self::RemoveCapability => "RemoveCapability",
            Self::ListBuckets => "ListBuckets",
            Self::GetBucket => "GetBucket",
            Self::CheckBucketIndex => "CheckBucketIndex",
            Self::RemoveBucket => "RemoveBucket",
            Self::LinkBucket => "LinkBucket",
            Self::UnlinkBucket => "UnlinkBucket",
            Self::RemoveObject => "RemoveObject",
            Self::GetPolicy => "GetPolicy",
            Self::GetQuota => "GetQuota",
            Self::SetQuota => "SetQuota",
            Self::SetBucketQuota => "SetBucketQuota",
        }
    }

    /// The HTTP method the gateway expects.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::GetUsage
            | Self::ListUsers
            | Self::GetUser
            | Self::ListBuckets
            | Self::GetBucket
            | Self::CheckBucketIndex
            | Self::GetPolicy
            | Self::GetQuota => http::Method::GET,
            Self::CreateUser
            | Self::CreateSubuser
            | Self::CreateKey
            | Self::AddCapability
            | Self::LinkBucket
            | Self::SetQuota
            | Self::SetBucketQuota => http::Method::PUT,
            Self::ModifyUser | Self::ModifySubuser | Self::UnlinkBucket => http::Method::POST,
            Self::TrimUsage
            | Self::RemoveUser
            | Self::RemoveSubuser
            | Self::RemoveKey
            | Self::RemoveCapability
            | Self::RemoveBucket
            | Self::RemoveObject => http::Method::DELETE,
        }
    }

    /// The resource path below the admin prefix.
    #[must_use]
    pub fn resource(&self) -> &'static str {
        match self {
            Self::GetUsage | Self::TrimUsage => "/usage",
            Self::ListUsers => "/metadata/user",
            Self::ListBuckets => "/metadata/bucket",
            Self::GetUser
            | Self::CreateUser
            | Self::ModifyUser
            | Self::RemoveUser
            | Self::CreateSubuser
            | Self::ModifySubuser
            | Self::RemoveSubuser
            | Self::CreateKey
            | Self::RemoveKey
            | Self::AddCapability
            | Self::RemoveCapability
            | Self::GetQuota
            | Self::SetQuota => "/user",
            Self::GetBucket
            | Self::CheckBucketIndex
            | Self::RemoveBucket
            | Self::LinkBucket
            | Self::UnlinkBucket
            | Self::RemoveObject
            | Self::GetPolicy
            | Self::SetBucketQuota => "/bucket",
        }
    }

    /// The value-less query selector naming a sub-resource, if any.
    #[must_use]
    pub fn sub_resource(&self) -> Option<&'static str> {
        match self {
            Self::CreateSubuser | Self::ModifySubuser | Self::RemoveSubuser => Some("subuser"),
            Self::CreateKey | Self::RemoveKey => Some("key"),
            Self::AddCapability | Self::RemoveCapability => Some("caps"),
            Self::GetQuota | Self::SetQuota | Self::SetBucketQuota => Some("quota"),
            Self::CheckBucketIndex => Some("index"),
            Self::RemoveObject => Some("object"),
            Self::GetPolicy => Some("policy"),
            _ => None,
        }
    }

    /// Returns `true` if success is signalled by an empty response body.
    #[must_use]
    pub fn expects_empty_body(&self) -> bool {
        matches!(
            self,
            Self::TrimUsage
                | Self::RemoveUser
                | Self::RemoveSubuser
                | Self::RemoveKey
                | Self::RemoveBucket
                | Self::LinkBucket
                | Self::UnlinkBucket
                | Self::RemoveObject
                | Self::SetQuota
                | Self::SetBucketQuota
        )
    }
}

impl fmt::Display for AdminOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
