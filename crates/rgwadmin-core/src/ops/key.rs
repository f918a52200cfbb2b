//! Key accessors: `create_key` and `remove_key`.

use rgwadmin_model::{AccessKey, AdminOperation, KeyType};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::AdminClient;
use crate::error::AdminResult;

/// Arguments of [`AdminClient::create_key`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateKey {
    /// Owning user id.
    #[builder(setter(into))]
    pub uid: String,
    /// Owning subuser, for Swift keys.
    #[builder(default, setter(strip_option, into))]
    pub subuser: Option<String>,
    /// Key type.
    #[builder(default, setter(strip_option))]
    pub key_type: Option<KeyType>,
    /// Access key to assign.
    #[builder(default, setter(strip_option, into))]
    pub access_key: Option<String>,
    /// Secret key to assign.
    #[builder(default, setter(strip_option, into))]
    pub secret_key: Option<String>,
    /// Whether the gateway should generate the key.
    #[builder(default, setter(strip_option))]
    pub generate_key: Option<bool>,
}

/// Arguments of [`AdminClient::remove_key`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RemoveKey {
    /// Access key to remove. For Swift keys, the subuser's id.
    #[builder(setter(into))]
    pub access_key: String,
    /// Owning user id.
    #[builder(default, setter(strip_option, into))]
    pub uid: Option<String>,
    /// Owning subuser.
    #[builder(default, setter(strip_option, into))]
    pub subuser: Option<String>,
    /// Key type.
    #[builder(default, setter(strip_option))]
    pub key_type: Option<KeyType>,
}

impl AdminClient {
    /// Create or generate a key; returns the keys of that type afterwards.
    pub async fn create_key(&self, args: &CreateKey) -> AdminResult<Vec<AccessKey>> {
        let request = self
            .request(AdminOperation::CreateKey)
            .mandatory("uid", args.uid.as_str())
            .format_json()
            .optional("subuser", args.subuser.as_deref())
            .optional("key_type", args.key_type)
            .optional("access_key", args.access_key.as_deref())
            .optional("secret_key", args.secret_key.as_deref())
            .optional("generate_key", args.generate_key)
            .build();
        let mut keys: Vec<AccessKey> = self.fetch(request).await?;
        let key_type = args.key_type.unwrap_or_default();
        for key in &mut keys {
            key.key_type = key_type;
        }
        debug!(uid = %args.uid, %key_type, count = keys.len(), "Created key");
        Ok(keys)
    }

    /// Remove a key. Returns `true` when the gateway sent no body.
    pub async fn remove_key(&self, args: &RemoveKey) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::RemoveKey)
            .mandatory("access_key", args.access_key.as_str())
            .optional("uid", args.uid.as_deref())
            .optional("subuser", args.subuser.as_deref())
            .optional("key_type", args.key_type)
            .build();
        self.execute(request).await
    }
}
