use super::*;

/// Expect only the ids of items homed in the inventory, not linked ones
#[tokio::test]
async fn lists_homed_items_only() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let (anvil, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, garage.id, "Anvil")
        .await?;
    let (linked, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Bench Vise")
        .await?;
    test.catalog()
        .insert_placement(garage.id, linked.id, AccessLevel::Owner, true)
        .await?;

    let placement_repository = PlacementRepository::new(&test.db);
    let result = placement_repository.list_home_item_ids(garage.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), vec![anvil.id]);

    Ok(())
}
