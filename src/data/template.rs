use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::db::FieldTemplateModel;

/// Data layer for field templates and their ordered field sets.
pub struct TemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TemplateRepository<'a, C> {
    /// Creates a new instance of [`TemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<FieldTemplateModel, DbErr> {
        let template = entity::field_template::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        template.insert(self.db).await
    }

    pub async fn get(&self, template_id: i32) -> Result<Option<FieldTemplateModel>, DbErr> {
        entity::prelude::FieldTemplate::find_by_id(template_id)
            .one(self.db)
            .await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FieldTemplateModel>, DbErr> {
        entity::prelude::FieldTemplate::find()
            .filter(entity::field_template::Column::UserId.eq(user_id))
            .order_by_asc(entity::field_template::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn rename(
        &self,
        template: FieldTemplateModel,
        name: &str,
    ) -> Result<FieldTemplateModel, DbErr> {
        let mut template_am = template.into_active_model();
        template_am.name = ActiveValue::Set(name.to_owned());

        template_am.update(self.db).await
    }

    /// Replaces the template's field set, keeping the given order
    pub async fn set_fields(&self, template_id: i32, field_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::TemplateField::delete_many()
            .filter(entity::template_field::Column::TemplateId.eq(template_id))
            .exec(self.db)
            .await?;

        if field_ids.is_empty() {
            return Ok(());
        }

        let rows = field_ids
            .iter()
            .enumerate()
            .map(|(position, field_id)| entity::template_field::ActiveModel {
                template_id: ActiveValue::Set(template_id),
                field_id: ActiveValue::Set(*field_id),
                position: ActiveValue::Set(position as i32),
            });
        entity::prelude::TemplateField::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// The template's field ids in display order
    pub async fn list_field_ids(&self, template_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TemplateField::find()
            .filter(entity::template_field::Column::TemplateId.eq(template_id))
            .order_by_asc(entity::template_field::Column::Position)
            .select_only()
            .column(entity::template_field::Column::FieldId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Drops a field from every template that carries it, used when the
    /// field definition goes away
    pub async fn remove_field_everywhere(&self, field_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TemplateField::delete_many()
            .filter(entity::template_field::Column::FieldId.eq(field_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a template and its field set
    ///
    /// Returns OK regardless of the template existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, template_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TemplateField::delete_many()
            .filter(entity::template_field::Column::TemplateId.eq(template_id))
            .exec(self.db)
            .await?;

        entity::prelude::FieldTemplate::delete_by_id(template_id)
            .exec(self.db)
            .await
    }
}
