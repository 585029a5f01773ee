use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

/// Data layer for item-to-item relations.
///
/// A relation is undirected but stored as two reciprocal rows, so creating
/// and deleting always touch both directions.
pub struct RelationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RelationRepository<'a, C> {
    /// Creates a new instance of [`RelationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, item_id: i32, related_item_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::RelatedItem::find_by_id((item_id, related_item_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Inserts both directions of a relation
    pub async fn create_pair(&self, item_id: i32, related_item_id: i32) -> Result<(), DbErr> {
        entity::prelude::RelatedItem::insert_many([
            entity::related_item::ActiveModel {
                item_id: ActiveValue::Set(item_id),
                related_item_id: ActiveValue::Set(related_item_id),
            },
            entity::related_item::ActiveModel {
                item_id: ActiveValue::Set(related_item_id),
                related_item_id: ActiveValue::Set(item_id),
            },
        ])
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes both directions of a relation, returning how many rows went
    /// away
    pub async fn delete_pair(&self, item_id: i32, related_item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RelatedItem::delete_many()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::related_item::Column::ItemId.eq(item_id))
                            .add(entity::related_item::Column::RelatedItemId.eq(related_item_id)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::related_item::Column::ItemId.eq(related_item_id))
                            .add(entity::related_item::Column::RelatedItemId.eq(item_id)),
                    ),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ids of the items related to this one
    pub async fn list_related_ids(&self, item_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::RelatedItem::find()
            .filter(entity::related_item::Column::ItemId.eq(item_id))
            .select_only()
            .column(entity::related_item::Column::RelatedItemId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes every relation row touching an item, in either direction
    pub async fn delete_for_item(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RelatedItem::delete_many()
            .filter(
                Condition::any()
                    .add(entity::related_item::Column::ItemId.eq(item_id))
                    .add(entity::related_item::Column::RelatedItemId.eq(item_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
