//! Bucket integration tests.

#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};
    use rgwadmin_model::AdminErrorCode;

    use crate::{admin_client, cleanup_user, create_test_user};

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_list_no_buckets_for_new_user() {
        let client = admin_client();
        let user = create_test_user(&client, "nobuckets").await;

        let names = client
            .list_bucket_names(Some(&user.user_id))
            .await
            .expect("list_bucket_names");
        assert!(names.is_empty());

        let buckets: Vec<_> = client
            .buckets_for(&user.user_id)
            .try_collect()
            .await
            .expect("buckets_for");
        assert!(buckets.is_empty());

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_stream_bucket_details() {
        let client = admin_client();

        let buckets: Vec<_> = client.buckets().take(3).collect().await;
        for bucket in buckets {
            let bucket = bucket.expect("bucket detail");
            assert!(!bucket.bucket.is_empty());
        }
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_report_missing_bucket() {
        let client = admin_client();

        let err = client
            .get_bucket("test-no-such-bucket-rgwadmin", None)
            .await
            .unwrap_err();
        assert!(err.is_code(AdminErrorCode::NoSuchBucket));
    }
}
