//! Client for the RADOS Gateway admin API.
//!
//! Every call follows the same path: build an admin request, sign it, send it
//! through the [`Transport`](rgwadmin_http::Transport), classify the response,
//! and decode the JSON body into a typed entity. Gateway-reported failures
//! come back as [`AdminClientError::Admin`] carrying the typed error code.
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use rgwadmin_auth::Credentials;
//! use rgwadmin_core::{AdminClient, config::AdminConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AdminClient::new(AdminConfig::from_env(), Credentials::from_env()?);
//!
//! let user = client.get_user("alice").await?;
//! println!("{} <{}>", user.display_name, user.email);
//!
//! let buckets: Vec<_> = client.buckets_for("alice").try_collect().await?;
//! println!("{} buckets", buckets.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod ops;

#[cfg(test)]
pub(crate) mod testing;

pub use client::AdminClient;
pub use config::AdminConfig;
pub use error::{AdminClientError, AdminResult};
pub use listing::AdminStream;
pub use ops::{
    CreateKey, CreateUser, IndexCheck, ModifyUser, QuotaUpdate, RemoveKey, RemoveSubuser,
    SubuserRequest, TrimUsageQuery, UsageQuery,
};
pub use rgwadmin_auth::{Credentials, SignatureVersion, SigningScope};
pub use rgwadmin_model::{AdminError, AdminErrorCode};
