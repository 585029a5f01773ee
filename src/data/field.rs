use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::model::db::{FieldModel, ItemFieldModel};
use crate::util::text::slugify;

/// A field value joined with its definition, as shown on an item page.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct FieldValueRow {
    pub field_id: i32,
    pub name: String,
    pub slug: String,
    pub value: String,
    pub visible: bool,
}

/// Data layer for custom field definitions. The slug is derived from the
/// name and doubles as the field's search modifier.
pub struct FieldRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FieldRepository<'a, C> {
    /// Creates a new instance of [`FieldRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<FieldModel, DbErr> {
        let field = entity::field::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            slug: ActiveValue::Set(slugify(name)),
            kind: ActiveValue::Set("text".to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        field.insert(self.db).await
    }

    pub async fn get(&self, field_id: i32) -> Result<Option<FieldModel>, DbErr> {
        entity::prelude::Field::find_by_id(field_id).one(self.db).await
    }

    pub async fn get_by_slug(
        &self,
        user_id: i32,
        slug: &str,
    ) -> Result<Option<FieldModel>, DbErr> {
        entity::prelude::Field::find()
            .filter(entity::field::Column::UserId.eq(user_id))
            .filter(entity::field::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds the user's field whose slug matches the slugified name,
    /// creating the field on first use
    pub async fn get_or_create(&self, user_id: i32, name: &str) -> Result<FieldModel, DbErr> {
        if let Some(field) = self.get_by_slug(user_id, &slugify(name)).await? {
            return Ok(field);
        }

        self.create(user_id, name).await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FieldModel>, DbErr> {
        entity::prelude::Field::find()
            .filter(entity::field::Column::UserId.eq(user_id))
            .order_by_asc(entity::field::Column::Name)
            .all(self.db)
            .await
    }

    /// Renames a field, re-deriving its slug from the new name
    pub async fn rename(&self, field: FieldModel, name: &str) -> Result<FieldModel, DbErr> {
        let mut field_am = field.into_active_model();
        field_am.name = ActiveValue::Set(name.to_owned());
        field_am.slug = ActiveValue::Set(slugify(name));

        field_am.update(self.db).await
    }

    /// Deletes a field definition row
    ///
    /// Returns OK regardless of the field existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, field_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Field::delete_by_id(field_id).exec(self.db).await
    }
}

/// Data layer for field values on items. Visibility is a flag on the value
/// row; template attachment toggles it without touching the value itself.
pub struct ItemFieldRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemFieldRepository<'a, C> {
    /// Creates a new instance of [`ItemFieldRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        item_id: i32,
        field_id: i32,
    ) -> Result<Option<ItemFieldModel>, DbErr> {
        entity::prelude::ItemField::find()
            .filter(entity::item_field::Column::ItemId.eq(item_id))
            .filter(entity::item_field::Column::FieldId.eq(field_id))
            .one(self.db)
            .await
    }

    /// Writes the value of one field on one item, updating the row in place
    /// when it already exists
    pub async fn set_value(
        &self,
        user_id: i32,
        item_id: i32,
        field_id: i32,
        value: &str,
        visible: bool,
    ) -> Result<ItemFieldModel, DbErr> {
        if let Some(existing) = self.get(item_id, field_id).await? {
            let mut row_am = existing.into_active_model();
            row_am.value = ActiveValue::Set(value.to_owned());
            row_am.visible = ActiveValue::Set(visible);
            return row_am.update(self.db).await;
        }

        let row = entity::item_field::ActiveModel {
            field_id: ActiveValue::Set(field_id),
            item_id: ActiveValue::Set(item_id),
            value: ActiveValue::Set(value.to_owned()),
            visible: ActiveValue::Set(visible),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Lists an item's field values joined with their definitions, in field
    /// name order
    pub async fn list_rows_for_item(&self, item_id: i32) -> Result<Vec<FieldValueRow>, DbErr> {
        entity::prelude::ItemField::find()
            .join(JoinType::InnerJoin, entity::item_field::Relation::Field.def())
            .filter(entity::item_field::Column::ItemId.eq(item_id))
            .order_by_asc(entity::field::Column::Name)
            .select_only()
            .column(entity::item_field::Column::FieldId)
            .column_as(entity::field::Column::Name, "name")
            .column_as(entity::field::Column::Slug, "slug")
            .column(entity::item_field::Column::Value)
            .column(entity::item_field::Column::Visible)
            .into_model::<FieldValueRow>()
            .all(self.db)
            .await
    }

    /// Sets the visibility flag on the item's rows for the given fields
    pub async fn set_visibility(
        &self,
        item_id: i32,
        field_ids: &[i32],
        visible: bool,
    ) -> Result<u64, DbErr> {
        if field_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::ItemField::update_many()
            .col_expr(entity::item_field::Column::Visible, Expr::value(visible))
            .filter(entity::item_field::Column::ItemId.eq(item_id))
            .filter(entity::item_field::Column::FieldId.is_in(field_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Hides the item's rows for every field outside the given set
    pub async fn hide_not_in(&self, item_id: i32, field_ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::ItemField::update_many()
            .col_expr(entity::item_field::Column::Visible, Expr::value(false))
            .filter(entity::item_field::Column::ItemId.eq(item_id))
            .filter(entity::item_field::Column::FieldId.is_not_in(field_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the item's rows for every field outside the given set,
    /// returning how many rows went away
    pub async fn delete_not_in(&self, item_id: i32, field_ids: &[i32]) -> Result<u64, DbErr> {
        let mut delete = entity::prelude::ItemField::delete_many()
            .filter(entity::item_field::Column::ItemId.eq(item_id));
        if !field_ids.is_empty() {
            delete = delete.filter(entity::item_field::Column::FieldId.is_not_in(field_ids.to_vec()));
        }
        let result = delete.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_item(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ItemField::delete_many()
            .filter(entity::item_field::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every value of a field across all items, used when the field
    /// definition itself goes away
    pub async fn delete_for_field(&self, field_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ItemField::delete_many()
            .filter(entity::item_field::Column::FieldId.eq(field_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
