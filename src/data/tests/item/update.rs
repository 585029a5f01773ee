use super::*;

/// Expect a rename to re-derive the slug from the existing id
#[tokio::test]
async fn rename_rederives_slug() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let item = test
        .catalog()
        .insert_mock_item(account.user.id, "Cordless Drill")
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .update(
            item,
            ItemChanges {
                name: Some("Impact Driver".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok());
    let item = result.unwrap();
    assert_eq!(item.name, "Impact Driver");
    assert_eq!(item.slug, format!("{}-impact-driver", item.id));

    Ok(())
}

/// Expect untouched fields to survive a partial update
#[tokio::test]
async fn applies_partial_changes() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("william").await?;
    let item = test
        .catalog()
        .insert_mock_item(account.user.id, "Cordless Drill")
        .await?;
    let original_slug = item.slug.clone();

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .update(
            item,
            ItemChanges {
                quantity: Some(3),
                specific_location: Some("bin 4".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok());
    let item = result.unwrap();
    assert_eq!(item.quantity, 3);
    assert_eq!(item.specific_location, "bin 4");
    assert_eq!(item.name, "Cordless Drill");
    assert_eq!(item.slug, original_slug);

    Ok(())
}
