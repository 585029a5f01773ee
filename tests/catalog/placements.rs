//! Tests for placement behavior across moves, copies, links, and deletes.
//!
//! These tests verify the two structural rules of placements end to end: a
//! link stays the same item while a copy becomes an independent one, and an
//! item always keeps exactly one home row no matter how its placements are
//! shuffled around or how its inventories disappear.

use curio::{
    data::placement::PlacementRepository,
    model::item::{ItemPatch, ItemQuery},
    service::{
        inventory::InventoryService, item::ItemService, placement::PlacementService,
        query::ItemQueryService, scope::ScopeService,
    },
};
use curio_test_utils::prelude::*;
use entity::inventory::InventoryVisibility;

use super::scratch_images;

/// Tests that links track their item while copies drift.
///
/// Links item A into a shelf, copies it there as well, then renames A.
/// The linked row must show the new name because it is the same item; the
/// copied row must keep the old one because it is not.
///
/// Expected: 2 rows in the shelf, rename visible only through the link
#[tokio::test]
async fn links_track_edits_copies_do_not() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let shelf = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Shelf", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo")
        .await?;

    let images = scratch_images();
    let placement_service = PlacementService::new(&test.db);
    let item_service = ItemService::new(&test.db, &images);
    placement_service
        .link_items(account.user.id, &[item.id], Some(shelf.id))
        .await?;
    placement_service
        .copy_items(account.user.id, &[item.id], Some(shelf.id))
        .await?;
    item_service
        .update_item(
            account.user.id,
            item.id,
            ItemPatch {
                name: Some("Resonator Banjo".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let shelf_scope = scope_service
        .resolve(Some(account.user.id), None, Some("shelf"))
        .await?;
    let rows = query_service.query(&shelf_scope, &ItemQuery::default()).await?;

    assert_eq!(rows.len(), 2);
    let linked = rows.iter().find(|row| row.is_link).unwrap();
    let copied = rows.iter().find(|row| !row.is_link).unwrap();
    assert_eq!(linked.id, item.id);
    assert_eq!(linked.name, "Resonator Banjo");
    assert_ne!(copied.id, item.id);
    assert_eq!(copied.name, "Banjo");

    Ok(())
}

/// Tests home row uniqueness through a whole placement shuffle.
///
/// Runs one item through link, move onto its own link, link again, copy,
/// and finally the deletion of the inventory holding its home. After every
/// stage the item must have exactly one home row, and the re-homing on
/// inventory deletion must absorb the link already sitting in the default.
///
/// Expected: exactly one non-link placement for each item at every stage
#[tokio::test]
async fn home_row_stays_unique_through_shuffles() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let shed = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Shed", InventoryVisibility::Private)
        .await?;
    let annex = test
        .catalog()
        .insert_mock_inventory(account.user.id, "Annex", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo")
        .await?;

    let placement_service = PlacementService::new(&test.db);
    let inventory_service = InventoryService::new(&test.db);
    let placement_repo = PlacementRepository::new(&test.db);

    placement_service
        .link_items(account.user.id, &[item.id], Some(shed.id))
        .await?;
    // Moving onto the link absorbs it, leaving the home row alone in the shed.
    let moved = placement_service
        .move_items(account.user.id, &[item.id], Some(shed.id))
        .await?;
    let after_move = placement_repo.list_for_item(item.id).await?;
    assert_eq!(moved, 1);
    assert_eq!(after_move.len(), 1);
    assert!(!after_move[0].is_link);
    assert_eq!(after_move[0].inventory_id, shed.id);

    placement_service
        .link_items(account.user.id, &[item.id], None)
        .await?;
    let after_link = placement_repo.list_for_item(item.id).await?;
    assert_eq!(after_link.len(), 2);
    assert_eq!(after_link.iter().filter(|row| !row.is_link).count(), 1);

    placement_service
        .copy_items(account.user.id, &[item.id], Some(annex.id))
        .await?;

    // Deleting the shed re-homes the item into its owner's default, which
    // already holds the link; the arriving home row absorbs it.
    let rehomed = inventory_service
        .delete_inventory(account.user.id, shed.id)
        .await?;
    let after_delete = placement_repo.list_for_item(item.id).await?;
    assert_eq!(rehomed, 1);
    assert_eq!(after_delete.len(), 1);
    assert!(!after_delete[0].is_link);
    assert_eq!(after_delete[0].inventory_id, account.default_inventory.id);

    let copy_ids = placement_repo.list_item_ids(annex.id).await?;
    assert_eq!(copy_ids.len(), 1);
    let copy_home = placement_repo.get_home(copy_ids[0]).await?.unwrap();
    assert_eq!(copy_home.inventory_id, annex.id);

    Ok(())
}
