//! Integration tests against a live RADOS Gateway.
//!
//! These tests require a gateway whose admin API is reachable with the
//! configuration from `RGW_HOST`, `RGW_PORT`, `RGW_SECURE` and
//! `RGW_ADMIN_PATH`, and an admin key pair with `users=*;buckets=*;usage=*`
//! caps in `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`. They are marked
//! `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p rgwadmin-integration -- --ignored
//! ```

use std::sync::Once;

use rgwadmin_core::{AdminClient, AdminConfig, CreateUser, Credentials};
use rgwadmin_model::User;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create an admin client from the environment.
#[must_use]
pub fn admin_client() -> AdminClient {
    init_tracing();

    let credentials = Credentials::from_env().expect("admin credentials in environment");
    AdminClient::new(AdminConfig::from_env(), credentials)
}

/// Generate a unique user id for a test.
#[must_use]
pub fn test_uid(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a user with a generated S3 key.
pub async fn create_test_user(client: &AdminClient, prefix: &str) -> User {
    let uid = test_uid(prefix);
    let args = CreateUser::builder()
        .uid(uid.as_str())
        .display_name(format!("Test {prefix}"))
        .generate_key(true)
        .build();
    client.create_user(&args).await.expect("create_user")
}

/// Remove a user and its data, ignoring errors.
pub async fn cleanup_user(client: &AdminClient, uid: &str) {
    if let Err(e) = client.remove_user(uid, true).await {
        tracing::warn!(uid, error = %e, "cleanup failed");
    }
}

mod test_bucket;
mod test_error;
mod test_quota;
mod test_user;
