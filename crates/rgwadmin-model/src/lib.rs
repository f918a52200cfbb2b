//! Typed model of the RADOS Gateway admin API.
//!
//! - [`error`]: the registered admin error codes and the typed [`AdminError`]
//!   returned for every non-200 response.
//! - [`operations`]: the catalogue of admin endpoints ([`AdminOperation`]).
//! - [`types`]: the JSON documents returned by the gateway, decoded into
//!   fixed-field records. Fields the gateway adds that are not modelled here
//!   are ignored.

pub mod error;
pub mod operations;
pub mod types;

pub use error::{AdminError, AdminErrorCode};
pub use operations::AdminOperation;
pub use types::{
    AccessKey, Bucket, BucketUsage, Capability, KeyType, Quota, QuotaScope, SubUser,
    SubUserAccess, Usage, UsageBucket, UsageCategory, UsageEntry, UsageSummary, UsageTotals,
    User, UserStats,
};
