//! Quota and usage integration tests.

#[cfg(test)]
mod tests {
    use rgwadmin_core::{QuotaUpdate, UsageQuery};
    use rgwadmin_model::QuotaScope;

    use crate::{admin_client, cleanup_user, create_test_user};

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_set_and_read_user_quota() -> anyhow::Result<()> {
        let client = admin_client();
        let user = create_test_user(&client, "quota").await;

        let update = QuotaUpdate::builder()
            .max_objects(1000)
            .max_size_kb(1024)
            .enabled(true)
            .build();
        let result = async {
            anyhow::ensure!(
                client.set_quota(&user.user_id, QuotaScope::User, &update).await?,
                "set_quota reported failure"
            );
            let quota = client.get_quota(&user.user_id, QuotaScope::User).await?;
            anyhow::ensure!(quota.enabled, "quota not enabled");
            anyhow::ensure!(quota.max_objects == 1000, "unexpected max_objects {}", quota.max_objects);
            Ok(())
        }
        .await;

        cleanup_user(&client, &user.user_id).await;
        result
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_read_usage_summary() -> anyhow::Result<()> {
        let client = admin_client();

        let query = UsageQuery::builder()
            .show_summary(true)
            .show_entries(false)
            .build();
        let usage = client.get_usage(&query).await?;
        assert!(usage.entries.is_empty());
        Ok(())
    }
}
