//! Subuser accessors: `create_subuser`, `modify_subuser`, `remove_subuser`.

use rgwadmin_model::{AdminOperation, KeyType, SubUser, SubUserAccess};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::AdminClient;
use crate::error::AdminResult;

/// Arguments of [`AdminClient::create_subuser`] and [`AdminClient::modify_subuser`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct SubuserRequest {
    /// Parent user id.
    #[builder(setter(into))]
    pub uid: String,
    /// Subuser name or qualified id (`uid:sub`).
    #[builder(setter(into))]
    pub subuser: String,
    /// Secret key to assign.
    #[builder(default, setter(strip_option, into))]
    pub secret_key: Option<String>,
    /// Type of the key.
    #[builder(default, setter(strip_option))]
    pub key_type: Option<KeyType>,
    /// Access level.
    #[builder(default, setter(strip_option))]
    pub access: Option<SubUserAccess>,
    /// Whether the gateway should generate a secret.
    #[builder(default, setter(strip_option))]
    pub generate_secret: Option<bool>,
}

/// Arguments of [`AdminClient::remove_subuser`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RemoveSubuser {
    /// Parent user id.
    #[builder(setter(into))]
    pub uid: String,
    /// Subuser name or qualified id.
    #[builder(setter(into))]
    pub subuser: String,
    /// Also remove the subuser's keys.
    #[builder(default, setter(strip_option))]
    pub purge_keys: Option<bool>,
}

impl AdminClient {
    /// Create a subuser; returns the user's subusers afterwards.
    pub async fn create_subuser(&self, args: &SubuserRequest) -> AdminResult<Vec<SubUser>> {
        self.write_subuser(AdminOperation::CreateSubuser, args).await
    }

    /// Modify a subuser; returns the user's subusers afterwards.
    pub async fn modify_subuser(&self, args: &SubuserRequest) -> AdminResult<Vec<SubUser>> {
        self.write_subuser(AdminOperation::ModifySubuser, args).await
    }

    async fn write_subuser(
        &self,
        operation: AdminOperation,
        args: &SubuserRequest,
    ) -> AdminResult<Vec<SubUser>> {
        let request = self
            .request(operation)
            .mandatory("uid", args.uid.as_str())
            .mandatory("subuser", args.subuser.as_str())
            .format_json()
            .optional("secret_key", args.secret_key.as_deref())
            .optional("key_type", args.key_type)
            .optional("access", args.access)
            .optional("generate_secret", args.generate_secret)
            .build();
        let subusers: Vec<SubUser> = self.fetch(request).await?;
        debug!(%operation, uid = %args.uid, subuser = %args.subuser, "Wrote subuser");
        Ok(subusers)
    }

    /// Remove a subuser. Returns `true` when the gateway sent no body.
    pub async fn remove_subuser(&self, args: &RemoveSubuser) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::RemoveSubuser)
            .mandatory("uid", args.uid.as_str())
            .mandatory("subuser", args.subuser.as_str())
            .optional("purge_keys", args.purge_keys)
            .build();
        self.execute(request).await
    }
}
