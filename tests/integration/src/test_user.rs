//! User, subuser, key and capability integration tests.

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use rgwadmin_core::{CreateKey, ModifyUser, RemoveKey, RemoveSubuser, SubuserRequest};
    use rgwadmin_model::{Capability, KeyType, SubUserAccess};

    use crate::{admin_client, cleanup_user, create_test_user};

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_create_get_and_remove_user() {
        let client = admin_client();
        let user = create_test_user(&client, "crud").await;
        assert!(!user.suspended);
        assert!(!user.keys.is_empty(), "generated key expected");

        let fetched = client.get_user(&user.user_id).await.expect("get_user");
        assert_eq!(fetched.display_name, user.display_name);

        assert!(client.remove_user(&user.user_id, true).await.expect("remove_user"));
        let err = client.get_user(&user.user_id).await.unwrap_err();
        assert!(err.is_code(rgwadmin_model::AdminErrorCode::NoSuchUser));
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_modify_and_suspend_user() {
        let client = admin_client();
        let user = create_test_user(&client, "modify").await;

        let args = ModifyUser::builder()
            .uid(user.user_id.as_str())
            .display_name("Renamed")
            .suspended(true)
            .build();
        let modified = client.modify_user(&args).await.expect("modify_user");
        assert_eq!(modified.display_name, "Renamed");
        assert!(modified.suspended);

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_read_stats_of_user_without_usage() {
        let client = admin_client();
        let user = create_test_user(&client, "stats").await;

        let fetched = client
            .get_user_with_stats(&user.user_id)
            .await
            .expect("get_user_with_stats");
        assert_eq!(fetched.user_id, user.user_id);

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_list_created_user() {
        let client = admin_client();
        let user = create_test_user(&client, "list").await;

        let ids = client.list_user_ids().await.expect("list_user_ids");
        assert!(ids.contains(&user.user_id));

        let found = client
            .users()
            .try_filter(|u| futures::future::ready(u.user_id == user.user_id))
            .try_next()
            .await
            .expect("users stream");
        assert!(found.is_some());

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_manage_keys_and_subusers() {
        let client = admin_client();
        let user = create_test_user(&client, "keys").await;

        let keys = client
            .create_key(&CreateKey::builder().uid(user.user_id.as_str()).generate_key(true).build())
            .await
            .expect("create_key");
        assert!(keys.len() >= 2);

        let access_key = keys[0].access_key.clone().expect("s3 key has access key");
        assert!(
            client
                .remove_key(&RemoveKey::builder().access_key(access_key).uid(user.user_id.as_str()).build())
                .await
                .expect("remove_key")
        );

        let subuser = format!("{}:swift", user.user_id);
        let subusers = client
            .create_subuser(
                &SubuserRequest::builder()
                    .uid(user.user_id.as_str())
                    .subuser(subuser.as_str())
                    .key_type(KeyType::Swift)
                    .access(SubUserAccess::Full)
                    .generate_secret(true)
                    .build(),
            )
            .await
            .expect("create_subuser");
        assert!(subusers.iter().any(|s| s.id == subuser));

        assert!(
            client
                .remove_subuser(
                    &RemoveSubuser::builder()
                        .uid(user.user_id.as_str())
                        .subuser(subuser.as_str())
                        .purge_keys(true)
                        .build()
                )
                .await
                .expect("remove_subuser")
        );

        cleanup_user(&client, &user.user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires running gateway"]
    async fn test_should_add_and_remove_capabilities() {
        let client = admin_client();
        let user = create_test_user(&client, "caps").await;
        let caps = [Capability::new("usage", "read")];

        let granted = client
            .add_capability(&user.user_id, &caps)
            .await
            .expect("add_capability");
        assert!(granted.contains(&caps[0]));

        let remaining = client
            .remove_capability(&user.user_id, &caps)
            .await
            .expect("remove_capability");
        assert!(!remaining.contains(&caps[0]));

        cleanup_user(&client, &user.user_id).await;
    }
}
