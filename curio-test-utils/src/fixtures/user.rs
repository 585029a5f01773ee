//! User account fixture utilities.

use chrono::Utc;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{InventoryModel, ItemTypeModel, LocationModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

/// A user together with the rows every account receives at signup.
pub struct MockAccount {
    pub user: UserModel,
    pub default_inventory: InventoryModel,
    pub none_type: ItemTypeModel,
    pub none_location: LocationModel,
}

impl<'a> UserFixtures<'a> {
    /// Insert an activated user with standard test values.
    ///
    /// The email is derived from the username. If a user with the username
    /// already exists, returns the existing record instead of creating a
    /// duplicate.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        if let Some(existing_user) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_user);
        }

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{username}@example.com")),
            password_hash: ActiveValue::Set("hashed-password".to_string()),
            activated: ActiveValue::Set(true),
            token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a user together with its signup defaults: the hidden default
    /// inventory with an owner membership, plus the sentinel `"none"` item
    /// type and `"None"` location.
    pub async fn insert_mock_account(&mut self, username: &str) -> Result<MockAccount, TestError> {
        let user = self.insert_user(username).await?;

        let default_inventory =
            entity::prelude::Inventory::insert(entity::inventory::ActiveModel {
                name: ActiveValue::Set("default".to_string()),
                slug: ActiveValue::Set("default".to_string()),
                description: ActiveValue::Set(String::new()),
                owner_id: ActiveValue::Set(user.id),
                visibility: ActiveValue::Set(InventoryVisibility::Private),
                token: ActiveValue::Set(format!("{username}-default-token")),
                short_code: ActiveValue::Set(format!("{username}-dflt")),
                is_default: ActiveValue::Set(true),
                field_template_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?;

        entity::prelude::Membership::insert(entity::membership::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            inventory_id: ActiveValue::Set(default_inventory.id),
            access_level: ActiveValue::Set(AccessLevel::Owner),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec(&self.setup.db)
        .await?;

        let none_type = self.setup.catalog().insert_mock_item_type(user.id, "none").await?;
        let none_location = self
            .setup
            .catalog()
            .insert_mock_location(user.id, "None")
            .await?;

        Ok(MockAccount {
            user,
            default_inventory,
            none_type,
            none_location,
        })
    }
}
