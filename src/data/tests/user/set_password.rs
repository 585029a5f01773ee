use super::*;

/// Expect the password hash replaced and any reset token cleared
#[tokio::test]
async fn replaces_hash_and_clears_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user_repository = UserRepository::new(&test.db);
    let user = user_repository
        .create(
            "william",
            "william@example.com",
            "old-hash",
            "activation-token",
        )
        .await?;
    let user = user_repository.set_token(user, "reset-token").await?;

    let result = user_repository.set_password(user, "new-hash").await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.password_hash, "new-hash");
    assert!(user.token.is_none());

    Ok(())
}
