use super::*;

/// Expect success when creating a secondary inventory for an account
#[tokio::test]
async fn creates_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .create(NewInventory {
            name: "Garage".to_string(),
            slug: "garage".to_string(),
            description: "Tools and hardware".to_string(),
            owner_id: account.user.id,
            visibility: InventoryVisibility::Private,
            token: "garage-share-token".to_string(),
            short_code: "gar123".to_string(),
            is_default: false,
        })
        .await;

    assert!(result.is_ok());
    let inventory = result.unwrap();
    assert_eq!(inventory.slug, "garage");
    assert_eq!(inventory.owner_id, account.user.id);
    assert!(!inventory.is_default);
    assert!(inventory.field_template_id.is_none());

    Ok(())
}

/// Expect Error when required database tables have not been created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let inventory_repository = InventoryRepository::new(&test.db);
    let result = inventory_repository
        .create(NewInventory {
            name: "Garage".to_string(),
            slug: "garage".to_string(),
            description: String::new(),
            owner_id: 1,
            visibility: InventoryVisibility::Private,
            token: "garage-share-token".to_string(),
            short_code: "gar123".to_string(),
            is_default: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
