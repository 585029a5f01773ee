use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unactivated user carrying an activation token
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        token: &str,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            activated: ActiveValue::Set(false),
            token: ActiveValue::Set(Some(token.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_by_token(&self, token: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Marks a user activated and clears its token
    pub async fn activate(&self, user: UserModel) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.activated = ActiveValue::Set(true);
        user_am.token = ActiveValue::Set(None);

        user_am.update(self.db).await
    }

    /// Stores a fresh ephemeral token on a user, replacing any previous one
    pub async fn set_token(&self, user: UserModel, token: &str) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.token = ActiveValue::Set(Some(token.to_string()));

        user_am.update(self.db).await
    }

    /// Replaces a user's password hash and clears its token
    pub async fn set_password(
        &self,
        user: UserModel,
        password_hash: &str,
    ) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash.to_string());
        user_am.token = ActiveValue::Set(None);

        user_am.update(self.db).await
    }
}
