use super::*;

/// Expect every membership on the inventory removed, owner's included
#[tokio::test]
async fn removes_all_memberships() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("william").await?;
    let viewer = test.user().insert_mock_account("redra").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_membership(viewer.user.id, inventory.id, AccessLevel::Viewer)
        .await?;

    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository.delete_for_inventory(inventory.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 2);
    let remaining = membership_repository.list_for_inventory(inventory.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}
