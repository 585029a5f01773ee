//! In-app notification listing and dismissal.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::Error, model::db::NotificationModel,
};

/// Lists and dismisses in-app notifications.
///
/// Creation happens inside the services that produce the events, in their
/// transactions; this service only covers the recipient's side.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's notifications, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<NotificationModel>, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        Ok(notification_repo.list_for_user(user_id).await?)
    }

    /// Dismisses one of the actor's notifications.
    pub async fn dismiss(&self, actor_id: i32, notification_id: i32) -> Result<(), Error> {
        let notification_repo = NotificationRepository::new(self.db);
        let notification = match notification_repo.get(notification_id).await? {
            Some(notification) => notification,
            None => {
                return Err(Error::NotFound(format!(
                    "No notification with id {notification_id} found"
                )))
            }
        };
        if notification.user_id != actor_id {
            return Err(Error::Denied("This notification is not yours".to_string()));
        }

        notification_repo.delete(notification.id).await?;

        Ok(())
    }

    /// Clears every notification the actor has.
    ///
    /// # Returns
    /// - `u64` - How many notifications went away
    pub async fn dismiss_all(&self, actor_id: i32) -> Result<u64, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        Ok(notification_repo.delete_for_user(actor_id).await?)
    }
}
