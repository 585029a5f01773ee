use migration::Expr;
use sea_orm::{
    sea_query::Func, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, IntoActiveModel, IntoSimpleExpr, QueryFilter, QueryOrder,
};

use crate::model::db::ItemTypeModel;

/// Data layer for a user's item type vocabulary. Type names are matched
/// case-insensitively so "Book" and "book" resolve to the same row.
pub struct ItemTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemTypeRepository<'a, C> {
    /// Creates a new instance of [`ItemTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<ItemTypeModel, DbErr> {
        let item_type = entity::item_type::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        item_type.insert(self.db).await
    }

    pub async fn get(&self, item_type_id: i32) -> Result<Option<ItemTypeModel>, DbErr> {
        entity::prelude::ItemType::find_by_id(item_type_id)
            .one(self.db)
            .await
    }

    /// Finds the user's type whose name matches ignoring case
    pub async fn get_by_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<ItemTypeModel>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::UserId.eq(user_id))
            .filter(
                Expr::expr(Func::lower(entity::item_type::Column::Name.into_simple_expr()))
                    .eq(name.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Finds the user's type with this name, creating it on first use
    pub async fn get_or_create(&self, user_id: i32, name: &str) -> Result<ItemTypeModel, DbErr> {
        if let Some(item_type) = self.get_by_name(user_id, name).await? {
            return Ok(item_type);
        }

        self.create(user_id, name).await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ItemTypeModel>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::UserId.eq(user_id))
            .order_by_asc(entity::item_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn rename(
        &self,
        item_type: ItemTypeModel,
        name: &str,
    ) -> Result<ItemTypeModel, DbErr> {
        let mut item_type_am = item_type.into_active_model();
        item_type_am.name = ActiveValue::Set(name.to_owned());

        item_type_am.update(self.db).await
    }

    /// Deletes an item type row
    ///
    /// Returns OK regardless of the type existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_type_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ItemType::delete_by_id(item_type_id)
            .exec(self.db)
            .await
    }
}
