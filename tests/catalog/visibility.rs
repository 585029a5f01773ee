//! Tests for scope isolation around private material.
//!
//! Reaching a row without a membership takes two gates: the placement must be
//! exposed as `Public` and its inventory must be publicly browsable. These
//! tests verify that either gate alone keeps the row hidden and that a
//! private inventory is indistinguishable from a missing one for outsiders.

use curio::{
    error::Error,
    model::item::{ItemKey, ItemQuery},
    service::{placement::PlacementService, query::ItemQueryService, scope::ScopeService},
};
use curio_test_utils::prelude::*;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

/// Tests a publicly exposed placement inside a private inventory.
///
/// Verifies that the row stays invisible to anonymous viewers even though
/// its own exposure level is `Public`, and that naming the inventory fails
/// as if it did not exist.
///
/// Expected: empty listing, None lookup, NotFound for the inventory slug
#[tokio::test]
async fn public_row_in_private_inventory_stays_hidden() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let vault = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Vault", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, vault.id, "Signet Ring")
        .await?;

    let placement_service = PlacementService::new(&test.db);
    placement_service
        .change_access_level(owner.user.id, &[item.id], AccessLevel::Public)
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let anonymous_scope = scope_service.resolve(None, Some("odin"), None).await?;

    let rows = query_service
        .query(&anonymous_scope, &ItemQuery::default())
        .await?;
    let lookup = query_service
        .find_item(&anonymous_scope, ItemKey::Slug(&item.slug))
        .await?;
    let named = scope_service.resolve(None, Some("odin"), Some("vault")).await;

    assert!(rows.is_empty());
    assert!(lookup.is_none());
    assert!(matches!(named, Err(Error::NotFound(_))));

    Ok(())
}

/// Tests a narrowly exposed placement inside a public inventory.
///
/// Verifies that a public inventory reveals nothing about rows kept below
/// the `Public` level: the inventory itself resolves for anonymous viewers
/// but lists no items.
///
/// Expected: the inventory resolves, its listing is empty
#[tokio::test]
async fn private_row_in_public_inventory_stays_hidden() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let showcase = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, showcase.id, "Sextant")
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let inventory_scope = scope_service
        .resolve(None, Some("odin"), Some("showcase"))
        .await?;
    let catalog_scope = scope_service.resolve(None, Some("odin"), None).await?;

    let inventory_rows = query_service
        .query(&inventory_scope, &ItemQuery::default())
        .await?;
    let catalog_total = query_service
        .count(&catalog_scope, &ItemQuery::default())
        .await?;
    let lookup = query_service
        .find_item(&catalog_scope, ItemKey::Id(item.id))
        .await?;

    assert!(inventory_rows.is_empty());
    assert_eq!(catalog_total, 0);
    assert!(lookup.is_none());

    Ok(())
}

/// Tests a logged-in stranger against a private inventory.
///
/// Verifies that being authenticated grants nothing by itself: without a
/// membership the stranger sees the same empty slice as an anonymous viewer
/// and the inventory slug collapses into NotFound, never Denied.
///
/// Expected: empty listing and NotFound for the slug
#[tokio::test]
async fn stranger_is_no_better_than_anonymous() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let stranger = test.user().insert_mock_account("brunhild").await?;
    let vault = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Vault", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, vault.id, "Signet Ring")
        .await?;

    let placement_service = PlacementService::new(&test.db);
    placement_service
        .change_access_level(owner.user.id, &[item.id], AccessLevel::Public)
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let stranger_scope = scope_service
        .resolve(Some(stranger.user.id), Some("odin"), None)
        .await?;

    let rows = query_service
        .query(&stranger_scope, &ItemQuery::default())
        .await?;
    let named = scope_service
        .resolve(Some(stranger.user.id), Some("odin"), Some("vault"))
        .await;

    assert!(rows.is_empty());
    assert!(matches!(named, Err(Error::NotFound(_))));

    Ok(())
}
