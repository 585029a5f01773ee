use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::db::TagModel;

/// Data layer for a user's tag vocabulary and the item/tag join table.
pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user's tag with this exact value, creating it on first use
    pub async fn get_or_create(&self, user_id: i32, value: &str) -> Result<TagModel, DbErr> {
        if let Some(tag) = self.get_by_value(user_id, value).await? {
            return Ok(tag);
        }

        let tag = entity::tag::ActiveModel {
            value: ActiveValue::Set(value.to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        tag.insert(self.db).await
    }

    pub async fn get_by_value(
        &self,
        user_id: i32,
        value: &str,
    ) -> Result<Option<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .filter(entity::tag::Column::Value.eq(value))
            .one(self.db)
            .await
    }

    /// Resolves tag values to ids, silently dropping values the user has
    /// never tagged anything with
    pub async fn get_ids_by_values(
        &self,
        user_id: i32,
        values: &[String],
    ) -> Result<Vec<i32>, DbErr> {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .filter(entity::tag::Column::Value.is_in(values.to_vec()))
            .select_only()
            .column(entity::tag::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .order_by_asc(entity::tag::Column::Value)
            .all(self.db)
            .await
    }

    /// Lists the tags attached to an item, in value order
    pub async fn list_for_item(&self, item_id: i32) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .filter(
                entity::tag::Column::Id.in_subquery(
                    entity::prelude::ItemTag::find()
                        .select_only()
                        .column(entity::item_tag::Column::TagId)
                        .filter(entity::item_tag::Column::ItemId.eq(item_id))
                        .into_query(),
                ),
            )
            .order_by_asc(entity::tag::Column::Value)
            .all(self.db)
            .await
    }

    /// Attaches a tag to an item, a no-op when already attached
    pub async fn attach(&self, item_id: i32, tag_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::ItemTag::find_by_id((item_id, tag_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let item_tag = entity::item_tag::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            tag_id: ActiveValue::Set(tag_id),
        };
        item_tag.insert(self.db).await?;

        Ok(())
    }

    /// Clears every tag off an item, returning how many came off
    pub async fn detach_all(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ItemTag::delete_many()
            .filter(entity::item_tag::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
