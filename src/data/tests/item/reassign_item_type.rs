use super::*;

/// Expect only the user's items on the old type re-pointed
#[tokio::test]
async fn repoints_matching_items() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let redra = test.user().insert_mock_account("redra").await?;
    let tool_type = test
        .catalog()
        .insert_mock_item_type(william.user.id, "Tool")
        .await?;
    let redra_tool_type = test
        .catalog()
        .insert_mock_item_type(redra.user.id, "Tool")
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let drill = item_repository
        .create(NewItem {
            name: "Cordless Drill".to_string(),
            description: String::new(),
            quantity: 1,
            item_type_id: tool_type.id,
            location_id: william.none_location.id,
            specific_location: String::new(),
            user_id: william.user.id,
            short_code: "dr1ll0".to_string(),
        })
        .await?;
    item_repository
        .create(NewItem {
            name: "Hammer".to_string(),
            description: String::new(),
            quantity: 1,
            item_type_id: tool_type.id,
            location_id: william.none_location.id,
            specific_location: String::new(),
            user_id: william.user.id,
            short_code: "hamm3r".to_string(),
        })
        .await?;
    let redra_wrench = item_repository
        .create(NewItem {
            name: "Wrench".to_string(),
            description: String::new(),
            quantity: 1,
            item_type_id: redra_tool_type.id,
            location_id: redra.none_location.id,
            specific_location: String::new(),
            user_id: redra.user.id,
            short_code: "wr3nch".to_string(),
        })
        .await?;

    let result = item_repository
        .reassign_item_type(william.user.id, tool_type.id, william.none_type.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 2);
    let drill = item_repository.get(drill.id).await?.unwrap();
    assert_eq!(drill.item_type_id, william.none_type.id);
    let redra_wrench = item_repository.get(redra_wrench.id).await?.unwrap();
    assert_eq!(redra_wrench.item_type_id, redra_tool_type.id);

    Ok(())
}
