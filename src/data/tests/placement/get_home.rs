use super::*;

/// Expect the home row even when link rows exist
#[tokio::test]
async fn finds_home_among_links() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let (item, home) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Anvil")
        .await?;
    test.catalog()
        .insert_placement(garage.id, item.id, AccessLevel::Owner, true)
        .await?;

    let placement_repository = PlacementRepository::new(&test.db);
    let result = placement_repository.get_home(item.id).await;

    assert!(result.is_ok());
    let placement_option = result.unwrap();
    assert_eq!(placement_option.map(|placement| placement.id), Some(home.id));

    Ok(())
}

/// Expect None for an item that was never placed
#[tokio::test]
async fn returns_none_for_unplaced_item() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let item = test
        .catalog()
        .insert_mock_item(william.user.id, "Anvil")
        .await?;

    let placement_repository = PlacementRepository::new(&test.db);
    let result = placement_repository.get_home(item.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
