//! Capability accessors: `add_capability` and `remove_capability`.

use rgwadmin_model::{AdminOperation, Capability};

use crate::client::AdminClient;
use crate::error::AdminResult;

impl AdminClient {
    /// Grant capabilities; returns the user's capabilities afterwards.
    pub async fn add_capability(
        &self,
        uid: &str,
        caps: &[Capability],
    ) -> AdminResult<Vec<Capability>> {
        self.write_caps(AdminOperation::AddCapability, uid, caps).await
    }

    /// Revoke capabilities; returns the user's capabilities afterwards.
    pub async fn remove_capability(
        &self,
        uid: &str,
        caps: &[Capability],
    ) -> AdminResult<Vec<Capability>> {
        self.write_caps(AdminOperation::RemoveCapability, uid, caps).await
    }

    async fn write_caps(
        &self,
        operation: AdminOperation,
        uid: &str,
        caps: &[Capability],
    ) -> AdminResult<Vec<Capability>> {
        let request = self
            .request(operation)
            .mandatory("uid", uid)
            .mandatory("user_caps", Capability::to_param(caps))
            .format_json()
            .build();
        self.fetch(request).await
    }
}
