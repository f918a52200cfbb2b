//! Entities returned by the admin API.
//!
//! Each record is a snapshot of gateway state at fetch time, decoded from the
//! gateway's `snake_case` JSON. Fields the gateway adds that are not listed
//! here are ignored; fields it omits fall back to their defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The bucket-usage category holding regular object data.
pub const MAIN_USAGE_CATEGORY: &str = "rgw.main";

/// Separator between tenant and user id in a qualified uid.
pub const TENANT_SEPARATOR: char = '$';

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The API an access key authenticates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// S3 access/secret key pair.
    #[default]
    S3,
    /// Swift secret key of a subuser.
    Swift,
}

impl KeyType {
    /// Returns the wire-format string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Swift => "swift",
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level granted to a subuser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubUserAccess {
    /// Read only.
    #[serde(rename = "read")]
    Read,
    /// Write only.
    #[serde(rename = "write")]
    Write,
    /// Read and write.
    #[serde(rename = "readwrite")]
    ReadWrite,
    /// Full control.
    #[serde(rename = "full")]
    Full,
}

impl SubUserAccess {
    /// Returns the wire-format string used in requests.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "readwrite",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for SubUserAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a quota applies to a user as a whole or to each of its buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaScope {
    /// The user's total across all buckets.
    User,
    /// Each bucket owned by the user.
    Bucket,
}

impl QuotaScope {
    /// Returns the wire-format string (`quota-type` value).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bucket => "bucket",
        }
    }
}

impl std::fmt::Display for QuotaScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A gateway user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id, possibly tenant-qualified (`tenant$uid`).
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Email address; empty when unset.
    #[serde(default)]
    pub email: String,
    /// Whether the user is suspended.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub suspended: bool,
    /// Maximum number of buckets the user may own.
    #[serde(default)]
    pub max_buckets: i64,
    /// Subusers.
    #[serde(default)]
    pub subusers: Vec<SubUser>,
    /// S3 access keys.
    #[serde(default)]
    pub keys: Vec<AccessKey>,
    /// Swift keys.
    #[serde(default, deserialize_with = "deserialize_swift_keys")]
    pub swift_keys: Vec<AccessKey>,
    /// Administrative capabilities.
    #[serde(default)]
    pub caps: Vec<Capability>,
    /// Allowed operations, e.g. `read, write, delete`.
    #[serde(default)]
    pub op_mask: String,
    /// Default placement rule.
    #[serde(default)]
    pub default_placement: String,
    /// Placement tags.
    #[serde(default)]
    pub placement_tags: Vec<String>,
    /// Per-bucket quota.
    #[serde(default)]
    pub bucket_quota: Option<Quota>,
    /// User-wide quota.
    #[serde(default)]
    pub user_quota: Option<Quota>,
    /// Storage statistics, present only when requested.
    #[serde(default)]
    pub stats: Option<UserStats>,
}

impl User {
    /// The tenant part of the user id, if qualified.
    #[must_use]
    pub fn tenant(&self) -> Option<&str> {
        self.user_id
            .split_once(TENANT_SEPARATOR)
            .map(|(tenant, _)| tenant)
    }

    /// The user id without the tenant.
    #[must_use]
    pub fn uid(&self) -> &str {
        self.user_id
            .split_once(TENANT_SEPARATOR)
            .map_or(self.user_id.as_str(), |(_, uid)| uid)
    }

    /// All keys of the user, S3 first.
    pub fn all_keys(&self) -> impl Iterator<Item = &AccessKey> {
        self.keys.iter().chain(&self.swift_keys)
    }
}

/// Storage statistics of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Logical size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Allocated size in bytes.
    #[serde(default)]
    pub size_actual: u64,
    /// Logical size in KiB.
    #[serde(default)]
    pub size_kb: u64,
    /// Allocated size in KiB.
    #[serde(default)]
    pub size_kb_actual: u64,
    /// Number of objects.
    #[serde(default)]
    pub num_objects: u64,
}

/// A subuser of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubUser {
    /// Qualified subuser id (`uid:sub`).
    pub id: String,
    /// Permission string as reported by the gateway (`full-control`, ...).
    #[serde(default)]
    pub permissions: String,
}

/// An access key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKey {
    /// Owning user or subuser.
    pub user: String,
    /// Which API the key is for.
    #[serde(default)]
    pub key_type: KeyType,
    /// Access key id. Swift keys have none.
    #[serde(default)]
    pub access_key: Option<String>,
    /// Secret key.
    #[serde(default)]
    pub secret_key: Option<String>,
}

/// An administrative capability grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    /// Resource type, e.g. `users`, `buckets`, `usage`, `metadata`.
    #[serde(rename = "type")]
    pub cap_type: String,
    /// Permission, e.g. `read`, `write`, `*`.
    pub perm: String,
}

impl Capability {
    /// Create a capability grant.
    pub fn new(cap_type: impl Into<String>, perm: impl Into<String>) -> Self {
        Self {
            cap_type: cap_type.into(),
            perm: perm.into(),
        }
    }

    /// Render grants as the `user-caps` parameter value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgwadmin_model::Capability;
    ///
    /// let caps = [Capability::new("users", "*"), Capability::new("buckets", "read")];
    /// assert_eq!(Capability::to_param(&caps), "users=*;buckets=read");
    /// ```
    #[must_use]
    pub fn to_param(caps: &[Self]) -> String {
        caps.iter()
            .map(|c| format!("{}={}", c.cap_type, c.perm))
            .collect::<Vec<_>>()
            .join(";")
    }
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// A bucket as reported by the bucket info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket name.
    pub bucket: String,
    /// Bucket instance id.
    #[serde(default)]
    pub id: String,
    /// Owning user id.
    #[serde(default)]
    pub owner: String,
    /// Data pool (older gateways).
    #[serde(default)]
    pub pool: Option<String>,
    /// Index pool (older gateways).
    #[serde(default)]
    pub index_pool: Option<String>,
    /// Placement rule (newer gateways).
    #[serde(default)]
    pub placement_rule: Option<String>,
    /// Bucket marker.
    #[serde(default)]
    pub marker: String,
    /// Max marker.
    #[serde(default)]
    pub max_marker: String,
    /// Index version.
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub ver: String,
    /// Master index version.
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub master_ver: String,
    /// Last modification time as reported.
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub mtime: String,
    /// Bucket quota.
    #[serde(default)]
    pub bucket_quota: Option<Quota>,
    /// Usage per category; empty unless stats were requested.
    #[serde(default, deserialize_with = "deserialize_usage_map")]
    pub usage: BTreeMap<String, BucketUsage>,
}

impl Bucket {
    /// Usage of the main data category, if reported.
    #[must_use]
    pub fn main_usage(&self) -> Option<&BucketUsage> {
        self.usage.get(MAIN_USAGE_CATEGORY)
    }
}

/// Usage statistics of one bucket category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketUsage {
    /// Number of objects.
    #[serde(default)]
    pub num_objects: u64,
    /// Logical size in KiB.
    #[serde(default)]
    pub size_kb: u64,
    /// Allocated size in KiB.
    #[serde(default)]
    pub size_kb_actual: u64,
}

// ---------------------------------------------------------------------------
// Quotas
// ---------------------------------------------------------------------------

/// A user or bucket quota. Negative limits mean unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    /// Whether the quota is enforced.
    #[serde(default)]
    pub enabled: bool,
    /// Maximum number of objects.
    #[serde(default = "unlimited")]
    pub max_objects: i64,
    /// Maximum size in KiB.
    #[serde(default = "unlimited")]
    pub max_size_kb: i64,
    /// Whether sizes are checked against raw (unrounded) usage.
    #[serde(default)]
    pub check_on_raw: bool,
}

fn unlimited() -> i64 {
    -1
}

impl Default for Quota {
    fn default() -> Self {
        Self {
            enabled: false,
            max_objects: unlimited(),
            max_size_kb: unlimited(),
            check_on_raw: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

/// Usage report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Per-user, per-bucket entries (when `show-entries`).
    #[serde(default)]
    pub entries: Vec<UsageEntry>,
    /// Per-user totals (when `show-summary`).
    #[serde(default)]
    pub summary: Vec<UsageSummary>,
}

/// Usage entries of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// User id.
    #[serde(default)]
    pub user: String,
    /// Usage per bucket and time slot.
    #[serde(default)]
    pub buckets: Vec<UsageBucket>,
}

/// Usage of one bucket in one time slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBucket {
    /// Bucket name; empty for service-level operations.
    #[serde(default)]
    pub bucket: String,
    /// Slot start time as reported.
    #[serde(default)]
    pub time: String,
    /// Slot start as a UNIX timestamp.
    #[serde(default)]
    pub epoch: u64,
    /// Bucket owner.
    #[serde(default)]
    pub owner: String,
    /// Per-category counters.
    #[serde(default)]
    pub categories: Vec<UsageCategory>,
}

/// Counters for one operation category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCategory {
    /// Category name, e.g. `put_obj`.
    #[serde(default)]
    pub category: String,
    /// Bytes sent.
    #[serde(default)]
    pub bytes_sent: u64,
    /// Bytes received.
    #[serde(default)]
    pub bytes_received: u64,
    /// Operations issued.
    #[serde(default)]
    pub ops: u64,
    /// Operations that succeeded.
    #[serde(default)]
    pub successful_ops: u64,
}

/// Usage totals of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// User id.
    #[serde(default)]
    pub user: String,
    /// Per-category counters.
    #[serde(default)]
    pub categories: Vec<UsageCategory>,
    /// Sum over all categories.
    #[serde(default)]
    pub total: UsageTotals,
}

/// Summed usage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTotals {
    /// Bytes sent.
    #[serde(default)]
    pub bytes_sent: u64,
    /// Bytes received.
    #[serde(default)]
    pub bytes_received: u64,
    /// Operations issued.
    #[serde(default)]
    pub ops: u64,
    /// Operations that succeeded.
    #[serde(default)]
    pub successful_ops: u64,
}

// ---------------------------------------------------------------------------
// Decoding helpers
// ---------------------------------------------------------------------------

/// Gateways report flags as `0`/`1` or as booleans.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

/// Versions and times are strings on newer gateways and `0` on older ones.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}

fn deserialize_swift_keys<'de, D>(deserializer: D) -> Result<Vec<AccessKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut keys = Vec::<AccessKey>::deserialize(deserializer)?;
    for key in &mut keys {
        key.key_type = KeyType::Swift;
    }
    Ok(keys)
}

/// An empty usage section is sometimes rendered as `[]` instead of `{}`.
fn deserialize_usage_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BucketUsage>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UsageSection {
        Map(BTreeMap<String, BucketUsage>),
        Empty(Vec<serde_json::Value>),
    }

    Ok(match UsageSection::deserialize(deserializer)? {
        UsageSection::Map(map) => map,
        UsageSection::Empty(_) => BTreeMap::new(),
    })
}
