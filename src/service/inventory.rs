//! Inventory lifecycle and catalog listings.

use std::collections::HashMap;

use entity::access_level::AccessLevel;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        inventory::{InventoryChanges, InventoryRepository, NewInventory},
        item::ItemRepository,
        membership::MembershipRepository,
        placement::PlacementRepository,
        user::UserRepository,
    },
    error::Error,
    model::{
        db::InventoryModel,
        inventory::{InventoryDraft, InventoryPatch, InventorySummary},
    },
    util::{code, text},
};

/// Creates, edits, deletes, and lists inventories.
///
/// Deleting an inventory never deletes items; their home placements are
/// repointed to the respective item owner's default inventory so every item
/// keeps exactly one home row.
pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an inventory for the actor.
    ///
    /// # Behavior
    /// - The slug is derived from the trimmed name and must be unique among
    ///   the actor's inventories.
    /// - A fresh share token and short code are generated.
    /// - The actor's owner membership is written in the same transaction.
    pub async fn create_inventory(
        &self,
        actor_id: i32,
        draft: InventoryDraft,
    ) -> Result<InventoryModel, Error> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("An inventory needs a name".to_string()));
        }
        let slug = text::slugify(name);
        if slug.is_empty() {
            return Err(Error::Validation(
                "The name needs at least one letter or digit".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);

        if inventory_repo.get_by_slug(actor_id, &slug).await?.is_some() {
            return Err(Error::Conflict(format!(
                "You already have an inventory named \"{name}\""
            )));
        }

        let inventory = inventory_repo
            .create(NewInventory {
                name: name.to_string(),
                slug,
                description: draft.description.unwrap_or_default(),
                owner_id: actor_id,
                visibility: draft.visibility,
                token: code::share_token(),
                short_code: code::short_code(),
                is_default: false,
            })
            .await?;

        let membership_repo = MembershipRepository::new(&txn);
        membership_repo
            .create(actor_id, inventory.id, AccessLevel::Owner)
            .await?;

        txn.commit().await?;

        Ok(inventory)
    }

    /// Updates an inventory's name, description, or visibility.
    ///
    /// Owner-only. Renaming re-derives the slug, which must stay unique
    /// among the actor's inventories. The hidden default inventory cannot
    /// be changed.
    pub async fn update_inventory(
        &self,
        actor_id: i32,
        inventory_id: i32,
        patch: InventoryPatch,
    ) -> Result<InventoryModel, Error> {
        let inventory_repo = InventoryRepository::new(self.db);
        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };
        if inventory.owner_id != actor_id {
            return Err(Error::Denied(
                "Only the owner can change this inventory".to_string(),
            ));
        }
        if inventory.is_default {
            return Err(Error::Validation(
                "The default inventory cannot be changed".to_string(),
            ));
        }

        let mut changes = InventoryChanges {
            description: patch.description,
            visibility: patch.visibility,
            ..Default::default()
        };
        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(Error::Validation("An inventory needs a name".to_string()));
            }
            let slug = text::slugify(&name);
            if slug.is_empty() {
                return Err(Error::Validation(
                    "The name needs at least one letter or digit".to_string(),
                ));
            }
            if slug != inventory.slug
                && inventory_repo.get_by_slug(actor_id, &slug).await?.is_some()
            {
                return Err(Error::Conflict(format!(
                    "You already have an inventory named \"{name}\""
                )));
            }
            changes.name = Some(name);
            changes.slug = Some(slug);
        }

        Ok(inventory_repo.update(inventory, changes).await?)
    }

    /// Deletes an inventory, or leaves it when the actor is not the owner.
    ///
    /// # Behavior
    /// - A member who does not own the inventory only removes their own
    ///   membership; without one the inventory is reported as missing.
    /// - The owner deletes it for everyone: link rows into the inventory are
    ///   dropped, each home row is repointed to the default inventory of the
    ///   item's owner, memberships are removed, then the row itself.
    /// - The hidden default inventory cannot be deleted.
    ///
    /// # Returns
    /// - `u64` - How many items were repointed to a default inventory
    pub async fn delete_inventory(&self, actor_id: i32, inventory_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);
        let membership_repo = MembershipRepository::new(&txn);

        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };

        if inventory.owner_id != actor_id {
            let membership = match membership_repo.get(actor_id, inventory.id).await? {
                Some(membership) => membership,
                None => {
                    return Err(Error::NotFound(format!(
                        "No inventory with id {inventory_id} found"
                    )))
                }
            };
            membership_repo.delete(membership.id).await?;
            txn.commit().await?;

            return Ok(0);
        }

        if inventory.is_default {
            return Err(Error::Validation(
                "The default inventory cannot be deleted".to_string(),
            ));
        }

        let placement_repo = PlacementRepository::new(&txn);
        let item_repo = ItemRepository::new(&txn);

        // Re-pointing a link would duplicate a placement the item already
        // has elsewhere, so links just go away.
        placement_repo.delete_links_in_inventory(inventory.id).await?;

        let mut rehomed = 0;
        for item_id in placement_repo.list_home_item_ids(inventory.id).await? {
            let item = match item_repo.get(item_id).await? {
                Some(item) => item,
                None => continue,
            };
            let home = match placement_repo.get_home(item.id).await? {
                Some(home) => home,
                None => {
                    return Err(Error::Db(DbErr::RecordNotFound(format!(
                        "Home placement missing for item {}",
                        item.id
                    ))))
                }
            };
            let target = match inventory_repo.get_default(item.user_id).await? {
                Some(target) => target,
                None => {
                    return Err(Error::Db(DbErr::RecordNotFound(format!(
                        "Default inventory missing for user {}",
                        item.user_id
                    ))))
                }
            };
            // A link row the default already holds is absorbed by the
            // arriving home row.
            if let Some(existing) = placement_repo
                .get_by_item_and_inventory(item.id, target.id)
                .await?
            {
                placement_repo.delete(existing.id).await?;
            }
            placement_repo.repoint(home, target.id).await?;
            rehomed += 1;
        }

        membership_repo.delete_for_inventory(inventory.id).await?;
        inventory_repo.delete(inventory.id).await?;

        txn.commit().await?;

        Ok(rehomed)
    }

    /// Lists the inventories of a catalog as the viewer is allowed to see
    /// them.
    ///
    /// # Behavior
    /// - The owner browsing their own catalog sees every inventory they hold
    ///   a membership on, shared ones included, optionally filtered to one
    ///   access level.
    /// - Anyone else sees only the owner's public inventories, annotated
    ///   with the viewer's membership level where one exists.
    /// - Hidden default inventories never appear.
    ///
    /// # Arguments
    /// - `owner_id` - Whose catalog is being browsed
    /// - `viewer_id` - The browsing user, or `None` for anonymous
    /// - `level` - Restrict the own-catalog listing to one access level
    pub async fn list_for_viewer(
        &self,
        owner_id: i32,
        viewer_id: Option<i32>,
        level: Option<AccessLevel>,
    ) -> Result<Vec<InventorySummary>, Error> {
        let inventory_repo = InventoryRepository::new(self.db);
        let membership_repo = MembershipRepository::new(self.db);
        let placement_repo = PlacementRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        if viewer_id == Some(owner_id) {
            let memberships = match level {
                Some(level) => membership_repo.list_for_user_at_level(owner_id, level).await?,
                None => membership_repo.list_for_user(owner_id).await?,
            };

            let mut usernames: HashMap<i32, String> = HashMap::new();
            let mut summaries = Vec::with_capacity(memberships.len());
            for membership in memberships {
                let inventory = match inventory_repo.get(membership.inventory_id).await? {
                    Some(inventory) => inventory,
                    None => continue,
                };
                if inventory.is_default {
                    continue;
                }
                let owner_username = match usernames.get(&inventory.owner_id) {
                    Some(username) => username.clone(),
                    None => {
                        let username = match user_repo.get(inventory.owner_id).await? {
                            Some(user) => user.username,
                            None => continue,
                        };
                        usernames.insert(inventory.owner_id, username.clone());
                        username
                    }
                };
                let item_count = placement_repo.count_in_inventory(inventory.id).await?;
                summaries.push(InventorySummary {
                    id: inventory.id,
                    name: inventory.name,
                    slug: inventory.slug,
                    description: inventory.description,
                    owner_id: inventory.owner_id,
                    owner_username,
                    visibility: inventory.visibility,
                    item_count,
                    viewer_level: Some(membership.access_level),
                });
            }
            summaries.sort_by(|a, b| a.name.cmp(&b.name));

            return Ok(summaries);
        }

        let owner = match user_repo.get(owner_id).await? {
            Some(owner) => owner,
            None => {
                return Err(Error::NotFound(format!(
                    "No user with id {owner_id} found"
                )))
            }
        };

        let inventories = inventory_repo.list_public_for_owner(owner_id).await?;
        let mut summaries = Vec::with_capacity(inventories.len());
        for inventory in inventories {
            let viewer_level = match viewer_id {
                Some(viewer_id) => membership_repo
                    .get(viewer_id, inventory.id)
                    .await?
                    .map(|membership| membership.access_level),
                None => None,
            };
            let item_count = placement_repo.count_in_inventory(inventory.id).await?;
            summaries.push(InventorySummary {
                id: inventory.id,
                name: inventory.name,
                slug: inventory.slug,
                description: inventory.description,
                owner_id: inventory.owner_id,
                owner_username: owner.username.clone(),
                visibility: inventory.visibility,
                item_count,
                viewer_level,
            });
        }

        Ok(summaries)
    }

    /// Replaces an inventory's share token, invalidating old invite links.
    ///
    /// Owner-only.
    pub async fn rotate_token(
        &self,
        actor_id: i32,
        inventory_id: i32,
    ) -> Result<InventoryModel, Error> {
        let inventory_repo = InventoryRepository::new(self.db);
        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };
        if inventory.owner_id != actor_id {
            return Err(Error::Denied(
                "Only the owner can replace the share link".to_string(),
            ));
        }

        Ok(inventory_repo
            .set_token(inventory, &code::share_token())
            .await?)
    }
}
