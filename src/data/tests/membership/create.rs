use super::*;

/// Expect success when granting a user access to an inventory
#[tokio::test]
async fn creates_membership() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("william").await?;
    let viewer = test.user().insert_mock_account("redra").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Garage", InventoryVisibility::Private)
        .await?;

    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository
        .create(viewer.user.id, inventory.id, AccessLevel::Viewer)
        .await;

    assert!(result.is_ok());
    let membership = result.unwrap();
    assert_eq!(membership.user_id, viewer.user.id);
    assert_eq!(membership.access_level, AccessLevel::Viewer);

    Ok(())
}

/// Expect Error when the referenced inventory does not exist
#[tokio::test]
async fn fails_for_nonexistent_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let viewer = test.user().insert_mock_account("redra").await?;

    let nonexistent_inventory_id = 999;
    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository
        .create(viewer.user.id, nonexistent_inventory_id, AccessLevel::Viewer)
        .await;

    assert!(result.is_err());

    Ok(())
}
