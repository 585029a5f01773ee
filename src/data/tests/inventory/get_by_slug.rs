use super::*;

/// Expect Some when the owner has an inventory with the slug
#[tokio::test]
async fn finds_existing_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let inventory = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Garage", InventoryVisibility::Private)
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .get_by_slug(account.user.id, "garage")
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().map(|found| found.id), Some(inventory.id));

    Ok(())
}

/// Expect None when only another account owns an inventory with the slug
#[tokio::test]
async fn returns_none_for_other_owner() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let other = test.user().insert_mock_account("redra").await?;
    test.catalog()
        .insert_mock_inventory(other.user.id, "Garage", InventoryVisibility::Private)
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .get_by_slug(account.user.id, "garage")
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
