use super::*;

/// Expect Some for a granted (user, inventory) pair
#[tokio::test]
async fn finds_existing_membership() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("william").await?;
    let viewer = test.user().insert_mock_account("redra").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_membership(viewer.user.id, inventory.id, AccessLevel::Collaborator)
        .await?;

    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository.get(viewer.user.id, inventory.id).await;

    assert!(result.is_ok());
    let membership_option = result.unwrap();
    assert_eq!(
        membership_option.map(|membership| membership.access_level),
        Some(AccessLevel::Collaborator)
    );

    Ok(())
}

/// Expect None when the user was never granted access
#[tokio::test]
async fn returns_none_without_grant() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("william").await?;
    let viewer = test.user().insert_mock_account("redra").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Garage", InventoryVisibility::Private)
        .await?;

    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository.get(viewer.user.id, inventory.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
