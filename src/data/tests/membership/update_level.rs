use super::*;

/// Expect the access level replaced on the existing row
#[tokio::test]
async fn changes_access_level() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("william").await?;
    let viewer = test.user().insert_mock_account("redra").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let membership = test
        .catalog()
        .insert_membership(viewer.user.id, inventory.id, AccessLevel::Viewer)
        .await?;

    let membership_repository = MembershipRepository::new(&test.db);
    let result = membership_repository
        .update_level(membership, AccessLevel::Collaborator)
        .await;

    assert!(result.is_ok());
    let membership = result.unwrap();
    assert_eq!(membership.access_level, AccessLevel::Collaborator);
    assert_eq!(membership.user_id, viewer.user.id);

    Ok(())
}
