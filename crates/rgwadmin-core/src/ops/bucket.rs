//! Bucket accessors.
//!
//! Implements `get_bucket`, `list_bucket_names`, the lazy `buckets` /
//! `buckets_for` listings, `check_bucket_index`, `remove_bucket`,
//! `link_bucket`, `unlink_bucket`, `remove_object` and `get_policy`.

use rgwadmin_model::{AdminOperation, Bucket};
use tracing::debug;

use crate::client::AdminClient;
use crate::error::AdminResult;
use crate::listing::{AdminStream, lazy_listing};

/// Options of [`AdminClient::check_bucket_index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCheck {
    /// Also check multipart object accounting.
    pub check_objects: Option<bool>,
    /// Repair the index.
    pub fix: Option<bool>,
}

impl AdminClient {
    /// Read one bucket. Statistics are requested unless `stats` is `Some(false)`.
    pub async fn get_bucket(&self, bucket: &str, stats: Option<bool>) -> AdminResult<Bucket> {
        let request = self
            .request(AdminOperation::GetBucket)
            .format_json()
            .mandatory("bucket", bucket)
            .optional_or("stats", stats, true)
            .build();
        self.fetch(request).await
    }

    /// Enumerate bucket names, of one user or of the whole gateway.
    pub async fn list_bucket_names(&self, uid: Option<&str>) -> AdminResult<Vec<String>> {
        let request = match uid {
            Some(uid) => self
                .request(AdminOperation::GetBucket)
                .format_json()
                .mandatory("uid", uid)
                .mandatory("stats", false)
                .build(),
            None => self
                .request(AdminOperation::ListBuckets)
                .format_json()
                .build(),
        };
        let names: Vec<String> = self.fetch(request).await?;
        debug!(uid, count = names.len(), "Listed bucket names");
        Ok(names)
    }

    /// Every bucket with statistics, fetched one detail call per pulled item.
    #[must_use]
    pub fn buckets(&self) -> AdminStream<Bucket> {
        lazy_listing(
            self.clone(),
            |client| async move { client.list_bucket_names(None).await },
            |client, name| async move { client.get_bucket(&name, Some(true)).await },
        )
    }

    /// The buckets of one user with statistics, fetched lazily.
    #[must_use]
    pub fn buckets_for(&self, uid: &str) -> AdminStream<Bucket> {
        let uid = uid.to_owned();
        lazy_listing(
            self.clone(),
            move |client| async move { client.list_bucket_names(Some(&uid)).await },
            |client, name| async move { client.get_bucket(&name, Some(true)).await },
        )
    }

    /// Check, and optionally repair, a bucket index.
    ///
    /// The report format varies between gateway releases and is returned as
    /// raw JSON; an empty answer is `Value::Null`.
    pub async fn check_bucket_index(
        &self,
        bucket: &str,
        check: IndexCheck,
    ) -> AdminResult<serde_json::Value> {
        let request = self
            .request(AdminOperation::CheckBucketIndex)
            .mandatory("bucket", bucket)
            .format_json()
            .optional("check_objects", check.check_objects)
            .optional("fix", check.fix)
            .build();
        let operation = request.operation;
        match self.send(request).await? {
            Some(body) => Ok(rgwadmin_http::decode_json(operation, &body)?),
            None => Ok(serde_json::Value::Null),
        }
    }

    /// Remove a bucket. Returns `true` when the gateway sent no body.
    pub async fn remove_bucket(&self, bucket: &str, purge_objects: Option<bool>) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::RemoveBucket)
            .mandatory("bucket", bucket)
            .optional("purge_objects", purge_objects)
            .build();
        let removed = self.execute(request).await?;
        debug!(bucket, removed, "Removed bucket");
        Ok(removed)
    }

    /// Link a bucket instance to a user.
    pub async fn link_bucket(&self, bucket: &str, bucket_id: &str, uid: &str) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::LinkBucket)
            .mandatory("bucket", bucket)
            .mandatory("bucket_id", bucket_id)
            .mandatory("uid", uid)
            .build();
        self.execute(request).await
    }

    /// Unlink a bucket from a user.
    pub async fn unlink_bucket(&self, bucket: &str, uid: &str) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::UnlinkBucket)
            .mandatory("bucket", bucket)
            .mandatory("uid", uid)
            .build();
        self.execute(request).await
    }

    /// Remove one object from a bucket.
    pub async fn remove_object(&self, bucket: &str, object: &str) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::RemoveObject)
            .mandatory("bucket", bucket)
            .mandatory("object", object)
            .build();
        self.execute(request).await
    }

    /// Read the policy of a bucket, or of an object when `object` is given.
    pub async fn get_policy(
        &self,
        bucket: &str,
        object: Option<&str>,
    ) -> AdminResult<serde_json::Value> {
        let request = self
            .request(AdminOperation::GetPolicy)
            .mandatory("bucket", bucket)
            .optional("object", object)
            .format_json()
            .build();
        self.fetch(request).await
    }
}
