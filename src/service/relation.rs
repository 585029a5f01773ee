//! Symmetric "related items" pairs.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::relation::RelationRepository, error::Error, service::placement::owned_item,
};

/// Manages the symmetric relation between pairs of items.
///
/// Relations are stored as two mirrored rows so lookups from either side
/// stay a single indexed query; both rows are written and removed inside
/// one transaction.
pub struct RelationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationService<'a> {
    /// Creates a new instance of [`RelationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Relates two items the actor owns.
    ///
    /// # Behavior
    /// - An item cannot be related to itself.
    /// - Relating an already related pair fails with [`Error::Conflict`]
    ///   rather than silently writing duplicate rows.
    ///
    /// # Returns
    /// - `Vec<i32>` - The ids related to `item_id` after the change
    pub async fn relate(
        &self,
        actor_id: i32,
        item_id: i32,
        related_item_id: i32,
    ) -> Result<Vec<i32>, Error> {
        if item_id == related_item_id {
            return Err(Error::Validation(
                "An item cannot be related to itself".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let item = owned_item(&txn, actor_id, item_id).await?;
        let related = owned_item(&txn, actor_id, related_item_id).await?;

        let relation_repo = RelationRepository::new(&txn);
        if relation_repo.exists(item.id, related.id).await? {
            return Err(Error::Conflict(format!(
                "\"{}\" and \"{}\" are already related",
                item.name, related.name
            )));
        }
        relation_repo.create_pair(item.id, related.id).await?;

        txn.commit().await?;

        let relation_repo = RelationRepository::new(self.db);

        Ok(relation_repo.list_related_ids(item_id).await?)
    }

    /// Removes the relation between two items the actor owns.
    ///
    /// Both directions go in one transaction; a pair that is not related
    /// fails with [`Error::Conflict`].
    ///
    /// # Returns
    /// - `Vec<i32>` - The ids related to `item_id` after the change
    pub async fn unrelate(
        &self,
        actor_id: i32,
        item_id: i32,
        related_item_id: i32,
    ) -> Result<Vec<i32>, Error> {
        let txn = self.db.begin().await?;

        let item = owned_item(&txn, actor_id, item_id).await?;
        let related = owned_item(&txn, actor_id, related_item_id).await?;

        let relation_repo = RelationRepository::new(&txn);
        if !relation_repo.exists(item.id, related.id).await? {
            return Err(Error::Conflict(format!(
                "\"{}\" and \"{}\" are not related",
                item.name, related.name
            )));
        }
        relation_repo.delete_pair(item.id, related.id).await?;

        txn.commit().await?;

        let relation_repo = RelationRepository::new(self.db);

        Ok(relation_repo.list_related_ids(item_id).await?)
    }
}
