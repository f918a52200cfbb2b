//! Resource accessors.
//!
//! Each submodule adds the calls for one admin resource to [`AdminClient`]
//! and defines the argument types those calls take.
//!
//! [`AdminClient`]: crate::client::AdminClient

pub mod bucket;
pub mod caps;
pub mod key;
pub mod quota;
pub mod subuser;
pub mod usage;
pub mod user;

pub use bucket::IndexCheck;
pub use key::{CreateKey, RemoveKey};
pub use quota::QuotaUpdate;
pub use subuser::{RemoveSubuser, SubuserRequest};
pub use usage::{TrimUsageQuery, UsageQuery};
pub use user::{CreateUser, ModifyUser};
