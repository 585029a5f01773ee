use super::*;

/// Expect the template reference cleared on every inventory carrying it
#[tokio::test]
async fn clears_reference_on_all_inventories() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let field = test
        .catalog()
        .insert_mock_field(account.user.id, "Warranty")
        .await?;
    let template = test
        .catalog()
        .insert_mock_template(account.user.id, "Electronics", &[field.id])
        .await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let attic = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Attic", InventoryVisibility::Private)
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let garage = inventory_repository
        .set_field_template(garage, Some(template.id))
        .await?;
    inventory_repository
        .set_field_template(attic, Some(template.id))
        .await?;

    let result = inventory_repository
        .detach_template_everywhere(template.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 2);
    let garage = inventory_repository.get(garage.id).await?;
    assert!(garage.is_some_and(|found| found.field_template_id.is_none()));

    Ok(())
}

/// Expect zero affected rows when nothing references the template
#[tokio::test]
async fn returns_zero_for_unused_template() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let template = test
        .catalog()
        .insert_mock_template(account.user.id, "Electronics", &[])
        .await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .detach_template_everywhere(template.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);

    Ok(())
}
