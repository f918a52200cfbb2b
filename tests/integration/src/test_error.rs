//! Error mapping integration tests.

#[cfg(test)]
mod tests {
    use rgwadmin_core::{AdminClient, AdminClientError, AdminConfig, CreateUser, Credentials};
    use rgwadmin_model::AdminErrorCode;

    use crate::{admin_client, cleanup_user, create_test_user, test_uid};

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_return_no_such_user_on_remove() {
        let client = admin_client();

        let err = client.remove_user(&test_uid("ghost"), false).await.unwrap_err();
        assert!(err.is_code(AdminErrorCode::NoSuchUser), "got {err}");
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_return_user_exists_on_duplicate_create() {
        let client = admin_client();
        let user = create_test_user(&client, "dup").await;

        let args = CreateUser::builder()
            .uid(user.user_id.as_str())
            .display_name("Duplicate")
            .build();
        let err = client.create_user(&args).await.unwrap_err();
        assert!(err.is_code(AdminErrorCode::UserExists), "got {err}");

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_deny_unknown_credentials() {
        let client = AdminClient::new(
            AdminConfig::from_env(),
            Credentials::new("NOSUCHACCESSKEY", "nosuchsecret"),
        );

        let err = client.list_user_ids().await.unwrap_err();
        assert!(matches!(err, AdminClientError::Admin(_)), "got {err}");
        assert!(err.admin_code().is_some());
    }
}
