use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, QueryTrait,
};

use crate::model::db::ImageModel;

/// Data layer for image records and their item attachments. Only file names
/// live in the database; the bytes sit on disk under the owner's directory.
pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    /// Creates a new instance of [`ImageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, file_name: &str) -> Result<ImageModel, DbErr> {
        let image = entity::image::ActiveModel {
            file_name: ActiveValue::Set(file_name.to_owned()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        image.insert(self.db).await
    }

    pub async fn get(&self, image_id: i32) -> Result<Option<ImageModel>, DbErr> {
        entity::prelude::Image::find_by_id(image_id).one(self.db).await
    }

    /// Attaches an image to an item, a no-op when already attached
    pub async fn attach(&self, item_id: i32, image_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::ItemImage::find_by_id((item_id, image_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let item_image = entity::item_image::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            image_id: ActiveValue::Set(image_id),
        };
        item_image.insert(self.db).await?;

        Ok(())
    }

    /// Whether the image is attached to the item
    pub async fn is_attached(&self, item_id: i32, image_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::ItemImage::find_by_id((item_id, image_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Detaches an image from an item, returning how many join rows went
    /// away
    pub async fn detach(&self, item_id: i32, image_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ItemImage::delete_many()
            .filter(entity::item_image::Column::ItemId.eq(item_id))
            .filter(entity::item_image::Column::ImageId.eq(image_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// How many items still reference this image
    pub async fn count_attachments(&self, image_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ItemImage::find()
            .filter(entity::item_image::Column::ImageId.eq(image_id))
            .count(self.db)
            .await
    }

    pub async fn list_for_item(&self, item_id: i32) -> Result<Vec<ImageModel>, DbErr> {
        entity::prelude::Image::find()
            .filter(
                entity::image::Column::Id.in_subquery(
                    entity::prelude::ItemImage::find()
                        .select_only()
                        .column(entity::item_image::Column::ImageId)
                        .filter(entity::item_image::Column::ItemId.eq(item_id))
                        .into_query(),
                ),
            )
            .all(self.db)
            .await
    }

    /// Deletes an image record outright, returning its file name for disk
    /// cleanup
    pub async fn delete_row(&self, image: ImageModel) -> Result<String, DbErr> {
        entity::prelude::ItemImage::delete_many()
            .filter(entity::item_image::Column::ImageId.eq(image.id))
            .exec(self.db)
            .await?;
        entity::prelude::Image::delete_by_id(image.id)
            .exec(self.db)
            .await?;

        Ok(image.file_name)
    }

    /// Detaches every image from an item, deleting the records nothing else
    /// references. Returns the file names of the deleted records so the
    /// caller can remove them from disk.
    pub async fn delete_for_item(&self, item_id: i32) -> Result<Vec<String>, DbErr> {
        let images = self.list_for_item(item_id).await?;

        entity::prelude::ItemImage::delete_many()
            .filter(entity::item_image::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        let mut orphaned = Vec::with_capacity(images.len());
        for image in images {
            if self.count_attachments(image.id).await? == 0 {
                orphaned.push(self.delete_row(image).await?);
            }
        }

        Ok(orphaned)
    }
}
