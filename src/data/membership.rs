use chrono::Utc;
use entity::access_level::AccessLevel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::db::MembershipModel;

pub struct MembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    /// Creates a new instance of [`MembershipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        inventory_id: i32,
        access_level: AccessLevel,
    ) -> Result<MembershipModel, DbErr> {
        let membership = entity::membership::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            inventory_id: ActiveValue::Set(inventory_id),
            access_level: ActiveValue::Set(access_level),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// Finds the membership row for one (user, inventory) pair; at most one
    /// exists
    pub async fn get(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Option<MembershipModel>, DbErr> {
        entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::membership::Column::InventoryId.eq(inventory_id))
            .one(self.db)
            .await
    }

    /// Lists every membership a user holds
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<MembershipModel>, DbErr> {
        entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Lists every membership a user holds at exactly the given level
    pub async fn list_for_user_at_level(
        &self,
        user_id: i32,
        access_level: AccessLevel,
    ) -> Result<Vec<MembershipModel>, DbErr> {
        entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::membership::Column::AccessLevel.eq(access_level))
            .all(self.db)
            .await
    }

    /// Lists every membership granted on an inventory
    pub async fn list_for_inventory(
        &self,
        inventory_id: i32,
    ) -> Result<Vec<MembershipModel>, DbErr> {
        entity::prelude::Membership::find()
            .filter(entity::membership::Column::InventoryId.eq(inventory_id))
            .all(self.db)
            .await
    }

    pub async fn update_level(
        &self,
        membership: MembershipModel,
        access_level: AccessLevel,
    ) -> Result<MembershipModel, DbErr> {
        let mut membership_am = membership.into_active_model();
        membership_am.access_level = ActiveValue::Set(access_level);

        membership_am.update(self.db).await
    }

    /// Deletes one membership row
    ///
    /// Returns OK regardless of the membership existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, membership_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Membership::delete_by_id(membership_id)
            .exec(self.db)
            .await
    }

    /// Deletes every membership granted on an inventory
    pub async fn delete_for_inventory(&self, inventory_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Membership::delete_many()
            .filter(entity::membership::Column::InventoryId.eq(inventory_id))
            .exec(self.db)
            .await
    }
}
