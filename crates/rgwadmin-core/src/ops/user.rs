//! User accessors.
//!
//! Implements `get_user`, `get_user_with_stats`, `list_user_ids`, the lazy
//! `users` / `users_with_stats` listings, `create_user`, `modify_user` and
//! `remove_user`.

use rgwadmin_model::types::TENANT_SEPARATOR;
use rgwadmin_model::{AdminErrorCode, AdminOperation, Capability, KeyType, User};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::client::AdminClient;
use crate::error::AdminResult;
use crate::listing::{AdminStream, lazy_listing};

/// Arguments of [`AdminClient::create_user`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateUser {
    /// User id, without tenant.
    #[builder(setter(into))]
    pub uid: String,
    /// Display name.
    #[builder(setter(into))]
    pub display_name: String,
    /// Tenant; the user id becomes `tenant$uid`.
    #[builder(default, setter(strip_option, into))]
    pub tenant: Option<String>,
    /// Email address.
    #[builder(default, setter(strip_option, into))]
    pub email: Option<String>,
    /// Type of the generated or supplied key.
    #[builder(default, setter(strip_option))]
    pub key_type: Option<KeyType>,
    /// Access key to assign.
    #[builder(default, setter(strip_option, into))]
    pub access_key: Option<String>,
    /// Secret key to assign.
    #[builder(default, setter(strip_option, into))]
    pub secret_key: Option<String>,
    /// Capabilities to grant.
    #[builder(default)]
    pub user_caps: Vec<Capability>,
    /// Whether the gateway should generate a key pair.
    #[builder(default, setter(strip_option))]
    pub generate_key: Option<bool>,
    /// Maximum number of buckets.
    #[builder(default, setter(strip_option))]
    pub max_buckets: Option<i64>,
    /// Create the user suspended.
    #[builder(default, setter(strip_option))]
    pub suspended: Option<bool>,
}

/// Arguments of [`AdminClient::modify_user`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ModifyUser {
    /// User id, without tenant.
    #[builder(setter(into))]
    pub uid: String,
    /// Tenant of the user.
    #[builder(default, setter(strip_option, into))]
    pub tenant: Option<String>,
    /// New display name.
    #[builder(default, setter(strip_option, into))]
    pub display_name: Option<String>,
    /// New email address.
    #[builder(default, setter(strip_option, into))]
    pub email: Option<String>,
    /// Type of the generated or supplied key.
    #[builder(default, setter(strip_option))]
    pub key_type: Option<KeyType>,
    /// Access key to add.
    #[builder(default, setter(strip_option, into))]
    pub access_key: Option<String>,
    /// Secret key to add.
    #[builder(default, setter(strip_option, into))]
    pub secret_key: Option<String>,
    /// Capabilities to grant.
    #[builder(default)]
    pub user_caps: Vec<Capability>,
    /// Generate a new key pair. Sent as `false` when unset.
    #[builder(default, setter(strip_option))]
    pub generate_key: Option<bool>,
    /// New bucket limit.
    #[builder(default, setter(strip_option))]
    pub max_buckets: Option<i64>,
    /// Suspend or reactivate.
    #[builder(default, setter(strip_option))]
    pub suspended: Option<bool>,
}

/// `tenant$uid` when a tenant is given, `uid` otherwise.
pub(crate) fn qualified_uid(tenant: Option<&str>, uid: &str) -> String {
    match tenant {
        Some(tenant) if !tenant.is_empty() => format!("{tenant}{TENANT_SEPARATOR}{uid}"),
        _ => uid.to_owned(),
    }
}

fn caps_param(caps: &[Capability]) -> Option<String> {
    (!caps.is_empty()).then(|| Capability::to_param(caps))
}

impl AdminClient {
    /// Read a user.
    pub async fn get_user(&self, uid: &str) -> AdminResult<User> {
        let request = self
            .request(AdminOperation::GetUser)
            .mandatory("uid", uid)
            .format_json()
            .build();
        self.fetch(request).await
    }

    /// Read a user with storage statistics.
    ///
    /// A user without recorded usage makes the gateway answer `NoSuchKey`; in
    /// that case the user is read again without statistics. Every other error
    /// is returned unchanged.
    pub async fn get_user_with_stats(&self, uid: &str) -> AdminResult<User> {
        let request = self
            .request(AdminOperation::GetUser)
            .mandatory("uid", uid)
            .mandatory("stats", true)
            .format_json()
            .build();
        match self.fetch(request).await {
            Err(e) if e.is_code(AdminErrorCode::NoSuchKey) => {
                warn!(uid, "User has no usage stats, fetching without stats");
                self.get_user(uid).await
            }
            result => result,
        }
    }

    /// Enumerate every user id.
    pub async fn list_user_ids(&self) -> AdminResult<Vec<String>> {
        let request = self
            .request(AdminOperation::ListUsers)
            .format_json()
            .build();
        let ids: Vec<String> = self.fetch(request).await?;
        debug!(count = ids.len(), "Listed user ids");
        Ok(ids)
    }

    /// Every user, fetched one detail call per pulled item.
    #[must_use]
    pub fn users(&self) -> AdminStream<User> {
        lazy_listing(
            self.clone(),
            |client| async move { client.list_user_ids().await },
            |client, uid| async move { client.get_user(&uid).await },
        )
    }

    /// Every user with statistics, fetched one detail call per pulled item.
    #[must_use]
    pub fn users_with_stats(&self) -> AdminStream<User> {
        lazy_listing(
            self.clone(),
            |client| async move { client.list_user_ids().await },
            |client, uid| async move { client.get_user_with_stats(&uid).await },
        )
    }

    /// Create a user and return it as stored by the gateway.
    pub async fn create_user(&self, user: &CreateUser) -> AdminResult<User> {
        let uid = qualified_uid(user.tenant.as_deref(), &user.uid);
        let request = self
            .request(AdminOperation::CreateUser)
            .mandatory("uid", uid.as_str())
            .mandatory("display_name", user.display_name.as_str())
            .format_json()
            .optional("email", user.email.as_deref())
            .optional("key_type", user.key_type)
            .optional("access_key", user.access_key.as_deref())
            .optional("secret_key", user.secret_key.as_deref())
            .optional("user_caps", caps_param(&user.user_caps))
            .optional("generate_key", user.generate_key)
            .optional("max_buckets", user.max_buckets)
            .optional("suspended", user.suspended)
            .build();
        let created: User = self.fetch(request).await?;
        debug!(uid = %created.user_id, "Created user");
        Ok(created)
    }

    /// Modify a user and return it as stored by the gateway.
    pub async fn modify_user(&self, user: &ModifyUser) -> AdminResult<User> {
        let uid = qualified_uid(user.tenant.as_deref(), &user.uid);
        let request = self
            .request(AdminOperation::ModifyUser)
            .mandatory("uid", uid.as_str())
            .format_json()
            .optional("display_name", user.display_name.as_deref())
            .optional("email", user.email.as_deref())
            .optional("key_type", user.key_type)
            .optional("access_key", user.access_key.as_deref())
            .optional("secret_key", user.secret_key.as_deref())
            .optional("user_caps", caps_param(&user.user_caps))
            .optional_or("generate_key", user.generate_key, false)
            .optional("max_buckets", user.max_buckets)
            .optional("suspended", user.suspended)
            .build();
        let modified: User = self.fetch(request).await?;
        debug!(uid = %modified.user_id, "Modified user");
        Ok(modified)
    }

    /// Remove a user, optionally with all of its data.
    ///
    /// Returns `true` when the gateway sent no body. A missing user is a
    /// `NoSuchUser` error, not `false`.
    pub async fn remove_user(&self, uid: &str, purge_data: bool) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::RemoveUser)
            .mandatory("uid", uid)
            .mandatory("purge_data", purge_data)
            .build();
        let removed = self.execute(request).await?;
        debug!(uid, purge_data, "Removed user");
        Ok(removed)
    }
}
