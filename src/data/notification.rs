use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::db::NotificationModel;

/// Data layer for in-app notifications.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        from_user_id: i32,
        text: &str,
    ) -> Result<NotificationModel, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            from_user_id: ActiveValue::Set(from_user_id),
            text: ActiveValue::Set(text.to_owned()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Lists a user's notifications, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<NotificationModel>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get(&self, notification_id: i32) -> Result<Option<NotificationModel>, DbErr> {
        entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await
    }

    /// Deletes a notification row
    ///
    /// Returns OK regardless of the notification existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, notification_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Notification::delete_by_id(notification_id)
            .exec(self.db)
            .await
    }

    /// Clears every notification a user has, returning how many went away
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
