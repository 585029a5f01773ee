use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000007_items::Items;

static FK_RELATED_ITEM_ID: &str = "fk-related_items-item_id";
static FK_RELATED_RELATED_ITEM_ID: &str = "fk-related_items-related_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RelatedItems::Table)
                    .if_not_exists()
                    .col(integer(RelatedItems::ItemId))
                    .col(integer(RelatedItems::RelatedItemId))
                    .primary_key(
                        Index::create()
                            .col(RelatedItems::ItemId)
                            .col(RelatedItems::RelatedItemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RELATED_ITEM_ID)
                    .from_tbl(RelatedItems::Table)
                    .from_col(RelatedItems::ItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RELATED_RELATED_ITEM_ID)
                    .from_tbl(RelatedItems::Table)
                    .from_col(RelatedItems::RelatedItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RELATED_RELATED_ITEM_ID)
                    .table(RelatedItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RELATED_ITEM_ID)
                    .table(RelatedItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RelatedItems::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RelatedItems {
    Table,
    ItemId,
    RelatedItemId,
}
