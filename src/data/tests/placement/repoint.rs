use super::*;

/// Expect the row moved to the new inventory with level and flag intact
#[tokio::test]
async fn moves_row_keeping_level_and_flag() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Anvil")
        .await?;
    let link = test
        .catalog()
        .insert_placement(garage.id, item.id, AccessLevel::Collaborator, true)
        .await?;
    let attic = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Attic", InventoryVisibility::Private)
        .await?;

    let placement_repository = PlacementRepository::new(&test.db);
    let result = placement_repository.repoint(link, attic.id).await;

    assert!(result.is_ok());
    let placement = result.unwrap();
    assert_eq!(placement.inventory_id, attic.id);
    assert_eq!(placement.access_level, AccessLevel::Collaborator);
    assert!(placement.is_link);

    Ok(())
}
