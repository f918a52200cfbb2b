//! Quota accessors: `get_quota`, `set_quota` and `set_bucket_quota`.

use rgwadmin_model::{AdminOperation, Quota, QuotaScope};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::AdminClient;
use crate::error::AdminResult;

/// A partial quota update. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, TypedBuilder)]
pub struct QuotaUpdate {
    /// Maximum number of objects; negative for unlimited.
    #[builder(default, setter(strip_option))]
    pub max_objects: Option<i64>,
    /// Maximum size in KiB; negative for unlimited.
    #[builder(default, setter(strip_option))]
    pub max_size_kb: Option<i64>,
    /// Whether the quota is enforced.
    #[builder(default, setter(strip_option))]
    pub enabled: Option<bool>,
}

impl AdminClient {
    /// Read a user's user-scope or bucket-scope quota.
    pub async fn get_quota(&self, uid: &str, scope: QuotaScope) -> AdminResult<Quota> {
        let request = self
            .request(AdminOperation::GetQuota)
            .mandatory("uid", uid)
            .mandatory("quota_type", scope)
            .format_json()
            .build();
        self.fetch(request).await
    }

    /// Update a user's user-scope or bucket-scope quota.
    pub async fn set_quota(
        &self,
        uid: &str,
        scope: QuotaScope,
        update: &QuotaUpdate,
    ) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::SetQuota)
            .mandatory("uid", uid)
            .mandatory("quota_type", scope)
            .optional("max_objects", update.max_objects)
            .optional("max_size_kb", update.max_size_kb)
            .optional("enabled", update.enabled)
            .build();
        let updated = self.execute(request).await?;
        debug!(uid, %scope, ?update, "Set quota");
        Ok(updated)
    }

    /// Update the quota of one bucket.
    pub async fn set_bucket_quota(
        &self,
        uid: &str,
        bucket: &str,
        update: &QuotaUpdate,
    ) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::SetBucketQuota)
            .mandatory("uid", uid)
            .mandatory("bucket", bucket)
            .optional("max_objects", update.max_objects)
            .optional("max_size_kb", update.max_size_kb)
            .optional("enabled", update.enabled)
            .build();
        let updated = self.execute(request).await?;
        debug!(uid, bucket, ?update, "Set bucket quota");
        Ok(updated)
    }
}
