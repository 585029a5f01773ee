//! Item type and location management.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{item::ItemRepository, item_type::ItemTypeRepository, location::LocationRepository},
    error::Error,
    model::db::{ItemTypeModel, LocationModel},
};

/// Name of the per-user sentinel item type untyped items fall back to.
///
/// Created at signup and recreated on demand; it cannot be deleted.
pub const SENTINEL_TYPE_NAME: &str = "none";

/// Name of the per-user sentinel location unplaced items fall back to.
///
/// Created at signup and recreated on demand; it cannot be deleted.
pub const SENTINEL_LOCATION_NAME: &str = "None";

/// Manages the per-user taxonomy: item types and locations.
///
/// Both taxonomies resolve names case-insensitively, so `"Tool"` and
/// `"tool"` are the same type. Deleting a taxonomy row never orphans items;
/// they are re-pointed to the sentinel row first.
pub struct TaxonomyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaxonomyService<'a> {
    /// Creates a new instance of [`TaxonomyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an item type for the actor.
    pub async fn create_item_type(
        &self,
        actor_id: i32,
        name: &str,
    ) -> Result<ItemTypeModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A type needs a name".to_string()));
        }

        let item_type_repo = ItemTypeRepository::new(self.db);
        if item_type_repo.get_by_name(actor_id, name).await?.is_some() {
            return Err(Error::Conflict(format!(
                "You already have a type named \"{name}\""
            )));
        }

        Ok(item_type_repo.create(actor_id, name).await?)
    }

    /// Lists the actor's item types in name order.
    pub async fn list_item_types(&self, actor_id: i32) -> Result<Vec<ItemTypeModel>, Error> {
        let item_type_repo = ItemTypeRepository::new(self.db);

        Ok(item_type_repo.list_for_user(actor_id).await?)
    }

    /// Renames an item type the actor owns.
    ///
    /// The sentinel type keeps its name; renaming it would break the
    /// fallback resolution for untyped items.
    pub async fn rename_item_type(
        &self,
        actor_id: i32,
        item_type_id: i32,
        name: &str,
    ) -> Result<ItemTypeModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A type needs a name".to_string()));
        }

        let item_type_repo = ItemTypeRepository::new(self.db);
        let item_type = match item_type_repo.get(item_type_id).await? {
            Some(item_type) => item_type,
            None => {
                return Err(Error::NotFound(format!(
                    "No type with id {item_type_id} found"
                )))
            }
        };
        if item_type.user_id != actor_id {
            return Err(Error::Denied("You do not own this type".to_string()));
        }
        if item_type.name.eq_ignore_ascii_case(SENTINEL_TYPE_NAME) {
            return Err(Error::Validation(format!(
                "The \"{SENTINEL_TYPE_NAME}\" type cannot be renamed"
            )));
        }
        if let Some(existing) = item_type_repo.get_by_name(actor_id, name).await? {
            if existing.id != item_type.id {
                return Err(Error::Conflict(format!(
                    "You already have a type named \"{name}\""
                )));
            }
        }

        Ok(item_type_repo.rename(item_type, name).await?)
    }

    /// Deletes an item type, re-pointing its items to the sentinel type.
    ///
    /// # Behavior
    /// - The sentinel `"none"` type cannot be deleted.
    /// - Every item of the actor using the type is moved to the sentinel
    ///   type first, which is recreated on demand if it went missing.
    ///
    /// # Returns
    /// - `u64` - How many items were re-pointed
    pub async fn delete_item_type(&self, actor_id: i32, item_type_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let item_type_repo = ItemTypeRepository::new(&txn);

        let item_type = match item_type_repo.get(item_type_id).await? {
            Some(item_type) => item_type,
            None => {
                return Err(Error::NotFound(format!(
                    "No type with id {item_type_id} found"
                )))
            }
        };
        if item_type.user_id != actor_id {
            return Err(Error::Denied("You do not own this type".to_string()));
        }
        if item_type.name.eq_ignore_ascii_case(SENTINEL_TYPE_NAME) {
            return Err(Error::Validation(format!(
                "The \"{SENTINEL_TYPE_NAME}\" type cannot be deleted"
            )));
        }

        let sentinel = item_type_repo
            .get_or_create(actor_id, SENTINEL_TYPE_NAME)
            .await?;
        let item_repo = ItemRepository::new(&txn);
        let repointed = item_repo
            .reassign_item_type(actor_id, item_type.id, sentinel.id)
            .await?;
        item_type_repo.delete(item_type.id).await?;

        txn.commit().await?;

        Ok(repointed)
    }

    /// Creates a location for the actor.
    pub async fn create_location(&self, actor_id: i32, name: &str) -> Result<LocationModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A location needs a name".to_string()));
        }

        let location_repo = LocationRepository::new(self.db);
        if location_repo.get_by_name(actor_id, name).await?.is_some() {
            return Err(Error::Conflict(format!(
                "You already have a location named \"{name}\""
            )));
        }

        Ok(location_repo.create(actor_id, name).await?)
    }

    /// Lists the actor's locations in name order.
    pub async fn list_locations(&self, actor_id: i32) -> Result<Vec<LocationModel>, Error> {
        let location_repo = LocationRepository::new(self.db);

        Ok(location_repo.list_for_user(actor_id).await?)
    }

    /// Renames a location the actor owns.
    ///
    /// The sentinel location keeps its name, like the sentinel type.
    pub async fn rename_location(
        &self,
        actor_id: i32,
        location_id: i32,
        name: &str,
    ) -> Result<LocationModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A location needs a name".to_string()));
        }

        let location_repo = LocationRepository::new(self.db);
        let location = match location_repo.get(location_id).await? {
            Some(location) => location,
            None => {
                return Err(Error::NotFound(format!(
                    "No location with id {location_id} found"
                )))
            }
        };
        if location.user_id != actor_id {
            return Err(Error::Denied("You do not own this location".to_string()));
        }
        if location.name.eq_ignore_ascii_case(SENTINEL_LOCATION_NAME) {
            return Err(Error::Validation(format!(
                "The \"{SENTINEL_LOCATION_NAME}\" location cannot be renamed"
            )));
        }
        if let Some(existing) = location_repo.get_by_name(actor_id, name).await? {
            if existing.id != location.id {
                return Err(Error::Conflict(format!(
                    "You already have a location named \"{name}\""
                )));
            }
        }

        Ok(location_repo.rename(location, name).await?)
    }

    /// Deletes a location, re-pointing its items to the sentinel location.
    ///
    /// # Returns
    /// - `u64` - How many items were re-pointed
    pub async fn delete_location(&self, actor_id: i32, location_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let location_repo = LocationRepository::new(&txn);

        let location = match location_repo.get(location_id).await? {
            Some(location) => location,
            None => {
                return Err(Error::NotFound(format!(
                    "No location with id {location_id} found"
                )))
            }
        };
        if location.user_id != actor_id {
            return Err(Error::Denied("You do not own this location".to_string()));
        }
        if location.name.eq_ignore_ascii_case(SENTINEL_LOCATION_NAME) {
            return Err(Error::Validation(format!(
                "The \"{SENTINEL_LOCATION_NAME}\" location cannot be deleted"
            )));
        }

        let sentinel = location_repo
            .get_or_create(actor_id, SENTINEL_LOCATION_NAME)
            .await?;
        let item_repo = ItemRepository::new(&txn);
        let repointed = item_repo
            .reassign_location(actor_id, location.id, sentinel.id)
            .await?;
        location_repo.delete(location.id).await?;

        txn.commit().await?;

        Ok(repointed)
    }
}
