use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000007_items::Items;
use crate::m20260601_000009_tags::Tags;

static FK_ITEM_TAG_ITEM_ID: &str = "fk-item_tags-item_id";
static FK_ITEM_TAG_TAG_ID: &str = "fk-item_tags-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTags::Table)
                    .if_not_exists()
                    .col(integer(ItemTags::ItemId))
                    .col(integer(ItemTags::TagId))
                    .primary_key(
                        Index::create()
                            .col(ItemTags::ItemId)
                            .col(ItemTags::TagId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_TAG_ITEM_ID)
                    .from_tbl(ItemTags::Table)
                    .from_col(ItemTags::ItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_TAG_TAG_ID)
                    .from_tbl(ItemTags::Table)
                    .from_col(ItemTags::TagId)
                    .to_tbl(Tags::Table)
                    .to_col(Tags::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_TAG_TAG_ID)
                    .table(ItemTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_TAG_ITEM_ID)
                    .table(ItemTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemTags::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemTags {
    Table,
    ItemId,
    TagId,
}
