//! Tests for exposure levels across viewer audiences.
//!
//! These tests verify that a placement's exposure level orders visibility
//! monotonically: widening the level never hides a row from any audience,
//! narrowing it never reveals one, and a membership reaches every row of its
//! inventory regardless of the level on the row.

use curio::{
    model::item::ItemQuery,
    service::{placement::PlacementService, query::ItemQueryService, scope::ScopeService},
};
use curio_test_utils::prelude::*;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

/// Tests stepping one placement through every exposure level.
///
/// Verifies that at each step the owner sees at least as much as a member,
/// the member at least as much as an anonymous viewer, and that the
/// anonymous count never shrinks as the level widens toward `Public`.
///
/// Expected: counts ordered owner >= member >= anonymous at every level
#[tokio::test]
async fn wider_exposure_never_hides_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let member = test.user().insert_mock_account("loki").await?;
    let showcase = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, showcase.id, "Sextant")
        .await?;
    test.catalog()
        .insert_membership(member.user.id, showcase.id, AccessLevel::Viewer)
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let placement_service = PlacementService::new(&test.db);
    let owner_scope = scope_service
        .resolve(Some(owner.user.id), None, None)
        .await?;
    let member_scope = scope_service
        .resolve(Some(member.user.id), Some("odin"), None)
        .await?;
    let anonymous_scope = scope_service.resolve(None, Some("odin"), None).await?;

    let mut previous_anonymous = 0;
    for level in [
        AccessLevel::Owner,
        AccessLevel::Collaborator,
        AccessLevel::Viewer,
        AccessLevel::Public,
    ] {
        placement_service
            .change_access_level(owner.user.id, &[item.id], level)
            .await?;

        let for_owner = query_service
            .count(&owner_scope, &ItemQuery::default())
            .await?;
        let for_member = query_service
            .count(&member_scope, &ItemQuery::default())
            .await?;
        let for_anonymous = query_service
            .count(&anonymous_scope, &ItemQuery::default())
            .await?;

        assert!(for_anonymous <= for_member);
        assert!(for_member <= for_owner);
        assert!(for_anonymous >= previous_anonymous);
        previous_anonymous = for_anonymous;
    }

    // At Public the row must finally be reachable without a membership.
    assert_eq!(previous_anonymous, 1);

    Ok(())
}

/// Tests narrowing a public placement back down.
///
/// Verifies that dropping the exposure level from `Public` revokes the
/// anonymous audience while the owner and the member keep seeing the row.
///
/// Expected: anonymous count falls to 0, member and owner counts stay 1
#[tokio::test]
async fn narrowing_exposure_revokes_anonymous_sight() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let member = test.user().insert_mock_account("loki").await?;
    let showcase = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, showcase.id, "Sextant")
        .await?;
    test.catalog()
        .insert_membership(member.user.id, showcase.id, AccessLevel::Viewer)
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let placement_service = PlacementService::new(&test.db);
    let owner_scope = scope_service
        .resolve(Some(owner.user.id), None, None)
        .await?;
    let member_scope = scope_service
        .resolve(Some(member.user.id), Some("odin"), None)
        .await?;
    let anonymous_scope = scope_service.resolve(None, Some("odin"), None).await?;

    placement_service
        .change_access_level(owner.user.id, &[item.id], AccessLevel::Public)
        .await?;
    let anonymous_before = query_service
        .count(&anonymous_scope, &ItemQuery::default())
        .await?;

    placement_service
        .change_access_level(owner.user.id, &[item.id], AccessLevel::Viewer)
        .await?;
    let anonymous_after = query_service
        .count(&anonymous_scope, &ItemQuery::default())
        .await?;
    let member_after = query_service
        .count(&member_scope, &ItemQuery::default())
        .await?;
    let owner_after = query_service
        .count(&owner_scope, &ItemQuery::default())
        .await?;

    assert_eq!(anonymous_before, 1);
    assert_eq!(anonymous_after, 0);
    assert_eq!(member_after, 1);
    assert_eq!(owner_after, 1);

    Ok(())
}

/// Tests a viewer-level membership against the narrowest exposure.
///
/// Verifies that a member reaches a row kept at the `Owner` level both
/// through the catalog-wide scope and through the named inventory.
///
/// Expected: 1 row in both scopes
#[tokio::test]
async fn viewer_membership_reaches_rows_at_any_level() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let member = test.user().insert_mock_account("loki").await?;
    let vault = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Vault", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, vault.id, "Signet Ring")
        .await?;
    test.catalog()
        .insert_membership(member.user.id, vault.id, AccessLevel::Viewer)
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let catalog_scope = scope_service
        .resolve(Some(member.user.id), Some("odin"), None)
        .await?;
    let inventory_scope = scope_service
        .resolve(Some(member.user.id), Some("odin"), Some("vault"))
        .await?;

    let catalog_rows = query_service
        .query(&catalog_scope, &ItemQuery::default())
        .await?;
    let inventory_rows = query_service
        .query(&inventory_scope, &ItemQuery::default())
        .await?;

    assert_eq!(catalog_rows.len(), 1);
    assert_eq!(catalog_rows[0].id, item.id);
    assert_eq!(inventory_rows.len(), 1);
    assert_eq!(inventory_rows[0].access_level, AccessLevel::Owner);

    Ok(())
}
