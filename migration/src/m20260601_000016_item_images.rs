use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000007_items::Items;
use crate::m20260601_000015_images::Images;

static FK_ITEM_IMAGE_ITEM_ID: &str = "fk-item_images-item_id";
static FK_ITEM_IMAGE_IMAGE_ID: &str = "fk-item_images-image_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemImages::Table)
                    .if_not_exists()
                    .col(integer(ItemImages::ItemId))
                    .col(integer(ItemImages::ImageId))
                    .primary_key(
                        Index::create()
                            .col(ItemImages::ItemId)
                            .col(ItemImages::ImageId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_IMAGE_ITEM_ID)
                    .from_tbl(ItemImages::Table)
                    .from_col(ItemImages::ItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_IMAGE_IMAGE_ID)
                    .from_tbl(ItemImages::Table)
                    .from_col(ItemImages::ImageId)
                    .to_tbl(Images::Table)
                    .to_col(Images::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_IMAGE_IMAGE_ID)
                    .table(ItemImages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_IMAGE_ITEM_ID)
                    .table(ItemImages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemImages::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemImages {
    Table,
    ItemId,
    ImageId,
}
