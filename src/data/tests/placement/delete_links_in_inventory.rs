use super::*;

/// Expect link rows removed while home rows survive
#[tokio::test]
async fn removes_links_only() -> Result<(), TestError> {
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
    let result = placement_repository.delete_links_in_inventory(garage.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 1);
    let remaining = placement_repository.count_in_inventory(garage.id).await?;
    assert_eq!(remaining, 1);
    let home = placement_repository
        .get_by_item_and_inventory(anvil.id, garage.id)
        .await?;
    assert!(home.is_some());

    Ok(())
}
