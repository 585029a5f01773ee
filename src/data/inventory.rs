use chrono::Utc;
use entity::inventory::InventoryVisibility;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::db::InventoryModel;

/// Column values for a new inventory row. The service layer derives the slug
/// and generates the token and short code before handing this over.
pub struct NewInventory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub owner_id: i32,
    pub visibility: InventoryVisibility,
    pub token: String,
    pub short_code: String,
    pub is_default: bool,
}

/// Column changes for an existing inventory; `None` fields are left as-is.
#[derive(Default)]
pub struct InventoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<InventoryVisibility>,
}

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewInventory) -> Result<InventoryModel, DbErr> {
        let inventory = entity::inventory::ActiveModel {
            name: ActiveValue::Set(new.name),
            slug: ActiveValue::Set(new.slug),
            description: ActiveValue::Set(new.description),
            owner_id: ActiveValue::Set(new.owner_id),
            visibility: ActiveValue::Set(new.visibility),
            token: ActiveValue::Set(new.token),
            short_code: ActiveValue::Set(new.short_code),
            is_default: ActiveValue::Set(new.is_default),
            field_template_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        inventory.insert(self.db).await
    }

    pub async fn get(&self, inventory_id: i32) -> Result<Option<InventoryModel>, DbErr> {
        entity::prelude::Inventory::find_by_id(inventory_id)
            .one(self.db)
            .await
    }

    /// Finds an inventory by its per-owner slug
    pub async fn get_by_slug(
        &self,
        owner_id: i32,
        slug: &str,
    ) -> Result<Option<InventoryModel>, DbErr> {
        entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::OwnerId.eq(owner_id))
            .filter(entity::inventory::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds an inventory by its secret share token
    pub async fn get_by_token(&self, token: &str) -> Result<Option<InventoryModel>, DbErr> {
        entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Returns the owner's hidden default inventory
    pub async fn get_default(&self, owner_id: i32) -> Result<Option<InventoryModel>, DbErr> {
        entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::OwnerId.eq(owner_id))
            .filter(entity::inventory::Column::IsDefault.eq(true))
            .one(self.db)
            .await
    }

    /// Lists the owner's public inventories, excluding the hidden default
    pub async fn list_public_for_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<InventoryModel>, DbErr> {
        entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::OwnerId.eq(owner_id))
            .filter(entity::inventory::Column::IsDefault.eq(false))
            .filter(entity::inventory::Column::Visibility.eq(InventoryVisibility::Public))
            .order_by_asc(entity::inventory::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        inventory: InventoryModel,
        changes: InventoryChanges,
    ) -> Result<InventoryModel, DbErr> {
        let mut inventory_am = inventory.into_active_model();
        if let Some(name) = changes.name {
            inventory_am.name = ActiveValue::Set(name);
        }
        if let Some(slug) = changes.slug {
            inventory_am.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = changes.description {
            inventory_am.description = ActiveValue::Set(description);
        }
        if let Some(visibility) = changes.visibility {
            inventory_am.visibility = ActiveValue::Set(visibility);
        }

        inventory_am.update(self.db).await
    }

    /// Attaches a field template to the inventory, or detaches with `None`
    pub async fn set_field_template(
        &self,
        inventory: InventoryModel,
        field_template_id: Option<i32>,
    ) -> Result<InventoryModel, DbErr> {
        let mut inventory_am = inventory.into_active_model();
        inventory_am.field_template_id = ActiveValue::Set(field_template_id);

        inventory_am.update(self.db).await
    }

    /// Replaces the inventory's share token
    pub async fn set_token(
        &self,
        inventory: InventoryModel,
        token: &str,
    ) -> Result<InventoryModel, DbErr> {
        let mut inventory_am = inventory.into_active_model();
        inventory_am.token = ActiveValue::Set(token.to_string());

        inventory_am.update(self.db).await
    }

    /// Clears the template reference on every inventory pointing at it
    pub async fn detach_template_everywhere(&self, field_template_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Inventory::update_many()
            .col_expr(
                entity::inventory::Column::FieldTemplateId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::inventory::Column::FieldTemplateId.eq(field_template_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an inventory row
    ///
    /// Returns OK regardless of the inventory existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, inventory_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Inventory::delete_by_id(inventory_id)
            .exec(self.db)
            .await
    }
}
