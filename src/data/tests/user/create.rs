use super::*;

/// Expect success when creating a new account record
#[tokio::test]
async fn creates_unactivated_user_with_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user_repository = UserRepository::new(&test.db);
    let result = user_repository
        .create(
            "william",
            "william@example.com",
            "hashed-password",
            "activation-token",
        )
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "william");
    assert!(!user.activated);
    assert_eq!(user.token.as_deref(), Some("activation-token"));

    Ok(())
}

/// Expect Error when required database tables have not been created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user_repository = UserRepository::new(&test.db);
    let result = user_repository
        .create(
            "william",
            "william@example.com",
            "hashed-password",
            "activation-token",
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
