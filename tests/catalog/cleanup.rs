//! Tests for deletions that must not leave stragglers behind.
//!
//! Bulk deletion with the all-items sentinel must stay inside the issuing
//! inventory and the acting user's own items, and removing taxonomy rows
//! must re-point every item that referenced them instead of dangling.

use curio::{
    data::item::ItemRepository,
    model::item::{ItemDraft, ItemQuery, ALL_ITEMS},
    service::{
        item::ItemService, query::ItemQueryService, scope::ScopeService,
        taxonomy::TaxonomyService,
    },
};
use curio_test_utils::prelude::*;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

use super::scratch_images;

/// Tests the all-items sentinel scoped to one shared inventory.
///
/// A collaborator wipes a shared inventory with the sentinel id. Only the
/// collaborator's own items placed there may go; the owner's items in the
/// same inventory and the collaborator's items elsewhere must survive.
///
/// Expected: exactly one deletion
#[tokio::test]
async fn sentinel_delete_stays_inside_the_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let owner = test.user().insert_mock_account("odin").await?;
    let collaborator = test.user().insert_mock_account("loki").await?;
    let workshop = test
        .catalog()
        .insert_mock_inventory(owner.user.id, "Workshop", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_membership(collaborator.user.id, workshop.id, AccessLevel::Collaborator)
        .await?;
    let (owner_item, _) = test
        .catalog()
        .insert_mock_item_in(owner.user.id, workshop.id, "Anvil")
        .await?;
    let (shared_item, _) = test
        .catalog()
        .insert_mock_item_in(collaborator.user.id, workshop.id, "Tongs")
        .await?;
    let (home_item, _) = test
        .catalog()
        .insert_mock_item_in(
            collaborator.user.id,
            collaborator.default_inventory.id,
            "Whetstone",
        )
        .await?;

    let images = scratch_images();
    let item_service = ItemService::new(&test.db, &images);
    let report = item_service
        .delete_items(collaborator.user.id, &[ALL_ITEMS], Some(workshop.id))
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    assert_eq!(report.items_deleted, 1);
    assert!(item_repo.get(shared_item.id).await?.is_none());
    assert!(item_repo.get(owner_item.id).await?.is_some());
    assert!(item_repo.get(home_item.id).await?.is_some());

    Ok(())
}

/// Tests deleting taxonomy rows that items still reference.
///
/// Creates an item classified under a custom type and location, deletes
/// both rows, and checks that the item was re-pointed to the sentinels and
/// still joins cleanly in listings.
///
/// Expected: the item reads type "none" and location "None" afterwards
#[tokio::test]
async fn taxonomy_deletes_leave_no_dangling_references() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;

    let images = scratch_images();
    let taxonomy_service = TaxonomyService::new(&test.db);
    let item_service = ItemService::new(&test.db, &images);
    let tool = taxonomy_service
        .create_item_type(account.user.id, "Tool")
        .await?;
    let garage = taxonomy_service
        .create_location(account.user.id, "Garage")
        .await?;
    let item = item_service
        .create_item(
            account.user.id,
            ItemDraft {
                name: "Hammer".to_string(),
                item_type: Some("Tool".to_string()),
                location_id: Some(garage.id),
                ..Default::default()
            },
            None,
        )
        .await?;

    let repointed_types = taxonomy_service
        .delete_item_type(account.user.id, tool.id)
        .await?;
    let repointed_locations = taxonomy_service
        .delete_location(account.user.id, garage.id)
        .await?;

    let item_repo = ItemRepository::new(&test.db);
    let reloaded = item_repo.get(item.id).await?.unwrap();
    assert_eq!(repointed_types, 1);
    assert_eq!(repointed_locations, 1);
    assert_eq!(reloaded.item_type_id, account.none_type.id);
    assert_eq!(reloaded.location_id, account.none_location.id);

    // The listing joins against type and location rows, so a dangling
    // reference would drop the item here.
    let scope_service = ScopeService::new(&test.db);
    let query_service = ItemQueryService::new(&test.db);
    let scope = scope_service
        .resolve(Some(account.user.id), None, None)
        .await?;
    let rows = query_service.query(&scope, &ItemQuery::default()).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].type_name, "none");
    assert_eq!(rows[0].location_name, "None");

    let remaining_types = taxonomy_service.list_item_types(account.user.id).await?;
    assert!(remaining_types.iter().all(|row| row.id != tool.id));

    Ok(())
}
