use super::*;

/// Expect the slug derived from the generated id and the name
#[tokio::test]
async fn creates_item_with_derived_slug() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .create(NewItem {
            name: "Cordless Drill".to_string(),
            description: "18V, two batteries".to_string(),
            quantity: 1,
            item_type_id: account.none_type.id,
            location_id: account.none_location.id,
            specific_location: "top shelf".to_string(),
            user_id: account.user.id,
            short_code: "dr1ll0".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let item = result.unwrap();
    assert_eq!(item.slug, format!("{}-cordless-drill", item.id));
    assert_eq!(item.short_code, "dr1ll0");
    assert_eq!(item.quantity, 1);

    Ok(())
}

/// Expect Error when the referenced item type does not exist
#[tokio::test]
async fn fails_for_nonexistent_item_type() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;

    let nonexistent_item_type_id = 999;
    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .create(NewItem {
            name: "Cordless Drill".to_string(),
            description: String::new(),
            quantity: 1,
            item_type_id: nonexistent_item_type_id,
            location_id: account.none_location.id,
            specific_location: String::new(),
            user_id: account.user.id,
            short_code: "dr1ll0".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
