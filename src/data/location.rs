use migration::Expr;
use sea_orm::{
    sea_query::Func, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, IntoActiveModel, IntoSimpleExpr, QueryFilter, QueryOrder,
};

use crate::model::db::LocationModel;

/// Data layer for a user's locations, matched case-insensitively by name
/// like item types.
pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<LocationModel, DbErr> {
        let location = entity::location::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    pub async fn get(&self, location_id: i32) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await
    }

    /// Finds the user's location whose name matches ignoring case
    pub async fn get_by_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::UserId.eq(user_id))
            .filter(
                Expr::expr(Func::lower(entity::location::Column::Name.into_simple_expr()))
                    .eq(name.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Finds the user's location with this name, creating it on first use
    pub async fn get_or_create(&self, user_id: i32, name: &str) -> Result<LocationModel, DbErr> {
        if let Some(location) = self.get_by_name(user_id, name).await? {
            return Ok(location);
        }

        self.create(user_id, name).await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<LocationModel>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::UserId.eq(user_id))
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn rename(
        &self,
        location: LocationModel,
        name: &str,
    ) -> Result<LocationModel, DbErr> {
        let mut location_am = location.into_active_model();
        location_am.name = ActiveValue::Set(name.to_owned());

        location_am.update(self.db).await
    }

    /// Deletes a location row
    ///
    /// Returns OK regardless of the location existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, location_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Location::delete_by_id(location_id)
            .exec(self.db)
            .await
    }
}
