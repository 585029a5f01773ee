//! Tests for item search behavior against a resolved scope.
//!
//! Tag filters are conjunctive and tolerate values the owner never used;
//! text search is only ever a narrowing step and cannot reach rows the
//! scope already excluded.

use curio::{
    model::item::ItemQuery,
    service::{query::ItemQueryService, scope::ScopeService},
};
use curio_test_utils::prelude::*;
use entity::inventory::InventoryVisibility;

/// Tests combining several tag filters.
///
/// Verifies that an item must carry every requested tag to match, not just
/// one of them.
///
/// Expected: only the item tagged with both values
#[tokio::test]
async fn tag_filters_are_conjunctive() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let (tagged_both, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Record A")
        .await?;
    let (tagged_one, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Record B")
        .await?;
    let vinyl = test.catalog().insert_mock_tag(account.user.id, "vinyl").await?;
    let rare = test.catalog().insert_mock_tag(account.user.id, "rare").await?;
    test.catalog().tag_item(tagged_both.id, vinyl.id).await?;
    test.catalog().tag_item(tagged_both.id, rare.id).await?;
    test.catalog().tag_item(tagged_one.id, vinyl.id).await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let scope = scope_service
        .resolve(Some(account.user.id), None, None)
        .await?;
    let query = ItemQuery {
        tags: vec!["vinyl".to_string(), "rare".to_string()],
        ..Default::default()
    };
    let rows = query_service.query(&scope, &query).await?;
    let total = query_service.count(&scope, &query).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, tagged_both.id);
    assert_eq!(total, 1);

    Ok(())
}

/// Tests a tag value the owner never used.
///
/// Verifies that an unknown tag value is dropped from the filter instead of
/// forcing the whole result empty.
///
/// Expected: the known tag still matches both tagged items
#[tokio::test]
async fn unknown_tag_values_are_ignored() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let (first, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Record A")
        .await?;
    let (second, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Record B")
        .await?;
    let vinyl = test.catalog().insert_mock_tag(account.user.id, "vinyl").await?;
    test.catalog().tag_item(first.id, vinyl.id).await?;
    test.catalog().tag_item(second.id, vinyl.id).await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let scope = scope_service
        .resolve(Some(account.user.id), None, None)
        .await?;
    let query = ItemQuery {
        tags: vec!["vinyl".to_string(), "flotsam".to_string()],
        ..Default::default()
    };
    let rows = query_service.query(&scope, &query).await?;

    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests a text search that matches a hidden item.
///
/// Verifies that a search string matching the name of an item in a private
/// inventory still returns nothing for an anonymous viewer.
///
/// Expected: empty result despite the matching name
#[tokio::test]
async fn search_never_escapes_the_scope() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let vault = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Vault", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_mock_item_in(owner.user.id, vault.id, "Signet Ring")
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let anonymous_scope = scope_service.resolve(None, Some("odin"), None).await?;
    let query = ItemQuery {
        search: Some("signet".to_string()),
        ..Default::default()
    };
    let rows = query_service.query(&anonymous_scope, &query).await?;

    assert!(rows.is_empty());

    Ok(())
}
