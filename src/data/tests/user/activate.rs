use super::*;

/// Expect the activated flag set and the signup token cleared
#[tokio::test]
async fn activates_user_and_clears_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user_repository = UserRepository::new(&test.db);
    let user = user_repository
        .create(
            "william",
            "william@example.com",
            "hashed-password",
            "activation-token",
        )
        .await?;

    let result = user_repository.activate(user).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.activated);
    assert!(user.token.is_none());

    Ok(())
}
