use super::*;

/// Expect Some when an account with the username exists
#[tokio::test]
async fn finds_existing_user() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::User)?;
    let user = test.user().insert_user("redra").await?;

    let user_repository = UserRepository::new(&test.db);
    let result = user_repository.get_by_username("redra").await;

    assert!(result.is_ok());
    let user_option = result.unwrap();
    assert_eq!(user_option.map(|found| found.id), Some(user.id));

    Ok(())
}

/// Expect None when no account carries the username
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let user_repository = UserRepository::new(&test.db);
    let result = user_repository.get_by_username("redra").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
