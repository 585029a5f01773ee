use entity::access_level::AccessLevel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::db::PlacementModel;

/// Data layer for placement rows, the join between items and inventories.
///
/// Every item keeps exactly one home row (`is_link = false`); all other
/// rows for the item are links. The repository only moves rows around,
/// the one-home invariant is enforced by the placement service.
pub struct PlacementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlacementRepository<'a, C> {
    /// Creates a new instance of [`PlacementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        inventory_id: i32,
        item_id: i32,
        access_level: AccessLevel,
        is_link: bool,
    ) -> Result<PlacementModel, DbErr> {
        let placement = entity::inventory_item::ActiveModel {
            inventory_id: ActiveValue::Set(inventory_id),
            item_id: ActiveValue::Set(item_id),
            access_level: ActiveValue::Set(access_level),
            is_link: ActiveValue::Set(is_link),
            ..Default::default()
        };

        placement.insert(self.db).await
    }

    pub async fn get(&self, placement_id: i32) -> Result<Option<PlacementModel>, DbErr> {
        entity::prelude::InventoryItem::find_by_id(placement_id)
            .one(self.db)
            .await
    }

    /// Finds the placement of an item inside one inventory, if any
    pub async fn get_by_item_and_inventory(
        &self,
        item_id: i32,
        inventory_id: i32,
    ) -> Result<Option<PlacementModel>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::ItemId.eq(item_id))
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .one(self.db)
            .await
    }

    /// Finds the item's home placement
    pub async fn get_home(&self, item_id: i32) -> Result<Option<PlacementModel>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::ItemId.eq(item_id))
            .filter(entity::inventory_item::Column::IsLink.eq(false))
            .one(self.db)
            .await
    }

    /// Lists every placement of an item, home row first
    pub async fn list_for_item(&self, item_id: i32) -> Result<Vec<PlacementModel>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::ItemId.eq(item_id))
            .order_by_asc(entity::inventory_item::Column::IsLink)
            .all(self.db)
            .await
    }

    /// Ids of the items whose home row sits in the given inventory
    pub async fn list_home_item_ids(&self, inventory_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .filter(entity::inventory_item::Column::IsLink.eq(false))
            .select_only()
            .column(entity::inventory_item::Column::ItemId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Ids of every item placed in the given inventory, links included
    pub async fn list_item_ids(&self, inventory_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .select_only()
            .column(entity::inventory_item::Column::ItemId)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn count_in_inventory(&self, inventory_id: i32) -> Result<u64, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .count(self.db)
            .await
    }

    /// Moves a placement row into another inventory, keeping its exposure
    /// level and link flag
    pub async fn repoint(
        &self,
        placement: PlacementModel,
        inventory_id: i32,
    ) -> Result<PlacementModel, DbErr> {
        let mut placement_am = placement.into_active_model();
        placement_am.inventory_id = ActiveValue::Set(inventory_id);

        placement_am.update(self.db).await
    }

    pub async fn set_level(
        &self,
        placement: PlacementModel,
        access_level: AccessLevel,
    ) -> Result<PlacementModel, DbErr> {
        let mut placement_am = placement.into_active_model();
        placement_am.access_level = ActiveValue::Set(access_level);

        placement_am.update(self.db).await
    }

    /// Deletes a placement row
    ///
    /// Returns OK regardless of the placement existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, placement_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InventoryItem::delete_by_id(placement_id)
            .exec(self.db)
            .await
    }

    /// Deletes every placement of an item, returning how many rows went away
    pub async fn delete_for_item(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::InventoryItem::delete_many()
            .filter(entity::inventory_item::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the link rows inside an inventory, leaving home rows alone
    pub async fn delete_links_in_inventory(&self, inventory_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::InventoryItem::delete_many()
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .filter(entity::inventory_item::Column::IsLink.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
