use super::*;

/// Expect only public inventories in name order, without the default inventory
#[tokio::test]
async fn lists_public_inventories_in_name_order() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    test.catalog()
        .insert_mock_inventory(account.user.id, "Workshop", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_mock_inventory(account.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    test.catalog()
        .insert_mock_inventory(account.user.id, "Attic", InventoryVisibility::Public)
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .list_public_for_owner(account.user.id)
        .await;

    assert!(result.is_ok());
    let inventories = result.unwrap();
    let names: Vec<&str> = inventories
        .iter()
        .map(|inventory| inventory.name.as_str())
        .collect();
    assert_eq!(names, vec!["Attic", "Showcase"]);

    Ok(())
}

/// Expect an empty list when every inventory is private
#[tokio::test]
async fn returns_empty_without_public_inventories() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    test.catalog()
        .insert_mock_inventory(account.user.id, "Workshop", InventoryVisibility::Private)
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .list_public_for_owner(account.user.id)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
