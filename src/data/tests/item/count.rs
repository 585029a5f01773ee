use super::*;

/// Expect the full match count regardless of the page window
#[tokio::test]
async fn counts_matches_ignoring_paging() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    for name in ["Anvil", "Banjo", "Crate"] {
        test.catalog()
            .insert_mock_item_in(william.user.id, william.default_inventory.id, name)
            .await?;
    }

    let criteria = ItemSearchCriteria {
        limit: 1,
        ..ItemSearchCriteria::within(ScopeFilter::HomeRows {
            viewer_id: william.user.id,
        })
    };
    let item_repository = ItemRepository::new(&test.db);
    let rows = item_repository.search(&criteria).await?;
    let result = item_repository.count(&criteria).await;

    assert_eq!(rows.len(), 1);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 3);

    Ok(())
}

/// Expect zero for a scope with nothing in it
#[tokio::test]
async fn counts_zero_for_empty_scope() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .count(&ItemSearchCriteria::within(ScopeFilter::OwnerPublic {
            owner_id: william.user.id,
        }))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);

    Ok(())
}
