//! Bulk placement operations: move, copy, link, and exposure changes.

use entity::access_level::AccessLevel;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        field::ItemFieldRepository,
        inventory::InventoryRepository,
        item::{ItemRepository, NewItem},
        membership::MembershipRepository,
        placement::PlacementRepository,
        tag::TagRepository,
    },
    error::Error,
    model::db::{InventoryModel, ItemModel},
    util::code,
};

/// Fetches an item and checks that `actor_id` owns it.
///
/// Every bulk placement or deletion runs on items the actor owns; links
/// other users placed are never touched through these paths.
pub(crate) async fn owned_item<C: ConnectionTrait>(
    db: &C,
    actor_id: i32,
    item_id: i32,
) -> Result<ItemModel, Error> {
    let item_repo = ItemRepository::new(db);

    let item = match item_repo.get(item_id).await? {
        Some(item) => item,
        None => return Err(Error::NotFound(format!("No item with id {item_id} found"))),
    };
    if item.user_id != actor_id {
        return Err(Error::Denied(format!(
            "You do not own the item \"{}\"",
            item.name
        )));
    }

    Ok(item)
}

/// Resolves the destination inventory of a placement mutation.
///
/// `None` targets the actor's hidden default inventory. A named inventory
/// requires a membership whose level can write; a viewer membership is not
/// enough to place items.
pub(crate) async fn writable_destination<C: ConnectionTrait>(
    db: &C,
    actor_id: i32,
    inventory_id: Option<i32>,
) -> Result<InventoryModel, Error> {
    let inventory_repo = InventoryRepository::new(db);

    match inventory_id {
        Some(inventory_id) => {
            let inventory = match inventory_repo.get(inventory_id).await? {
                Some(inventory) => inventory,
                None => {
                    return Err(Error::NotFound(format!(
                        "No inventory with id {inventory_id} found"
                    )))
                }
            };

            let membership_repo = MembershipRepository::new(db);
            let can_write = membership_repo
                .get(actor_id, inventory.id)
                .await?
                .is_some_and(|membership| membership.access_level.can_write());
            if !can_write {
                return Err(Error::Denied(format!(
                    "You do not have permission to place items in \"{}\"",
                    inventory.name
                )));
            }

            Ok(inventory)
        }
        None => match inventory_repo.get_default(actor_id).await? {
            Some(inventory) => Ok(inventory),
            None => Err(Error::Db(DbErr::RecordNotFound(format!(
                "Default inventory missing for user {actor_id}"
            )))),
        },
    }
}

/// Moves, copies, and links items between inventories and adjusts the
/// exposure level of their placements.
///
/// All operations run in a single transaction over the whole batch; one bad
/// item id rolls the batch back.
pub struct PlacementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlacementService<'a> {
    /// Creates a new instance of [`PlacementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves items into an inventory by repointing their home rows.
    ///
    /// # Behavior
    /// - Every item must be owned by the actor; the destination must be
    ///   writable by them. `None` targets their default inventory.
    /// - A link row the destination already holds for a moved item is
    ///   absorbed by the incoming home row, keeping one row per item and
    ///   inventory.
    /// - Items already homed in the destination are skipped and not counted.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user
    /// - `item_ids` - The items to move
    /// - `inventory_id` - The destination, or `None` for the default
    ///
    /// # Returns
    /// - `u64` - How many items actually moved
    pub async fn move_items(
        &self,
        actor_id: i32,
        item_ids: &[i32],
        inventory_id: Option<i32>,
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let destination = writable_destination(&txn, actor_id, inventory_id).await?;
        let placement_repo = PlacementRepository::new(&txn);

        let mut moved = 0;
        for &item_id in item_ids {
            let item = owned_item(&txn, actor_id, item_id).await?;
            let home = match placement_repo.get_home(item.id).await? {
                Some(home) => home,
                None => {
                    return Err(Error::Db(DbErr::RecordNotFound(format!(
                        "Home placement missing for item {}",
                        item.id
                    ))))
                }
            };
            if home.inventory_id == destination.id {
                continue;
            }

            if let Some(link) = placement_repo
                .get_by_item_and_inventory(item.id, destination.id)
                .await?
            {
                placement_repo.delete(link.id).await?;
            }
            placement_repo.repoint(home, destination.id).await?;
            moved += 1;
        }

        txn.commit().await?;

        Ok(moved)
    }

    /// Copies items into an inventory as fresh, independently owned items.
    ///
    /// # Behavior
    /// - Each copy gets its own id, slug, and short code, and starts homed
    ///   in the destination at level `Owner`.
    /// - Tags and custom field values are copied; images stay with the
    ///   original.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user
    /// - `item_ids` - The items to copy
    /// - `inventory_id` - The destination, or `None` for the default
    ///
    /// # Returns
    /// - `u64` - How many copies were created
    pub async fn copy_items(
        &self,
        actor_id: i32,
        item_ids: &[i32],
        inventory_id: Option<i32>,
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let destination = writable_destination(&txn, actor_id, inventory_id).await?;
        let item_repo = ItemRepository::new(&txn);
        let placement_repo = PlacementRepository::new(&txn);
        let tag_repo = TagRepository::new(&txn);
        let item_field_repo = ItemFieldRepository::new(&txn);

        let mut copied = 0;
        for &item_id in item_ids {
            let item = owned_item(&txn, actor_id, item_id).await?;

            let copy = item_repo
                .create(NewItem {
                    name: item.name.clone(),
                    description: item.description.clone(),
                    quantity: item.quantity,
                    item_type_id: item.item_type_id,
                    location_id: item.location_id,
                    specific_location: item.specific_location.clone(),
                    user_id: actor_id,
                    short_code: code::short_code(),
                })
                .await?;
            placement_repo
                .create(destination.id, copy.id, AccessLevel::Owner, false)
                .await?;

            for tag in tag_repo.list_for_item(item.id).await? {
                tag_repo.attach(copy.id, tag.id).await?;
            }
            for row in item_field_repo.list_rows_for_item(item.id).await? {
                item_field_repo
                    .set_value(actor_id, copy.id, row.field_id, &row.value, row.visible)
                    .await?;
            }
            copied += 1;
        }

        txn.commit().await?;

        Ok(copied)
    }

    /// Places secondary link rows for items into an inventory.
    ///
    /// # Behavior
    /// - A link carries the exposure level of the item's home row at the
    ///   time of linking.
    /// - An item that already has any row in the destination, home or link,
    ///   is skipped and not counted.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user
    /// - `item_ids` - The items to link
    /// - `inventory_id` - The destination, or `None` for the default
    ///
    /// # Returns
    /// - `u64` - How many link rows were created
    pub async fn link_items(
        &self,
        actor_id: i32,
        item_ids: &[i32],
        inventory_id: Option<i32>,
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let destination = writable_destination(&txn, actor_id, inventory_id).await?;
        let placement_repo = PlacementRepository::new(&txn);

        let mut linked = 0;
        for &item_id in item_ids {
            let item = owned_item(&txn, actor_id, item_id).await?;
            if placement_repo
                .get_by_item_and_inventory(item.id, destination.id)
                .await?
                .is_some()
            {
                continue;
            }
            let home = match placement_repo.get_home(item.id).await? {
                Some(home) => home,
                None => {
                    return Err(Error::Db(DbErr::RecordNotFound(format!(
                        "Home placement missing for item {}",
                        item.id
                    ))))
                }
            };

            placement_repo
                .create(destination.id, item.id, home.access_level, true)
                .await?;
            linked += 1;
        }

        txn.commit().await?;

        Ok(linked)
    }

    /// Sets the exposure level on every placement of the given items.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user, who must own every item
    /// - `item_ids` - The items to change
    /// - `access_level` - The level to set on home rows and links alike
    ///
    /// # Returns
    /// - `u64` - How many items were changed
    pub async fn change_access_level(
        &self,
        actor_id: i32,
        item_ids: &[i32],
        access_level: AccessLevel,
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let placement_repo = PlacementRepository::new(&txn);

        let mut changed = 0;
        for &item_id in item_ids {
            let item = owned_item(&txn, actor_id, item_id).await?;
            for placement in placement_repo.list_for_item(item.id).await? {
                placement_repo.set_level(placement, access_level).await?;
            }
            changed += 1;
        }

        txn.commit().await?;

        Ok(changed)
    }
}
