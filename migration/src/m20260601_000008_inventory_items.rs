use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000005_inventories::Inventories;
use crate::m20260601_000007_items::Items;

static FK_PLACEMENT_INVENTORY_ID: &str = "fk-inventory_items-inventory_id";
static FK_PLACEMENT_ITEM_ID: &str = "fk-inventory_items-item_id";
static IDX_PLACEMENT_INVENTORY_ITEM: &str = "idx-inventory_items-inventory_id-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItems::Id))
                    .col(integer(InventoryItems::InventoryId))
                    .col(integer(InventoryItems::ItemId))
                    .col(integer(InventoryItems::AccessLevel))
                    .col(boolean(InventoryItems::IsLink))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLACEMENT_INVENTORY_ID)
                    .from_tbl(InventoryItems::Table)
                    .from_col(InventoryItems::InventoryId)
                    .to_tbl(Inventories::Table)
                    .to_col(Inventories::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLACEMENT_ITEM_ID)
                    .from_tbl(InventoryItems::Table)
                    .from_col(InventoryItems::ItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACEMENT_INVENTORY_ITEM)
                    .table(InventoryItems::Table)
                    .col(InventoryItems::InventoryId)
                    .col(InventoryItems::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACEMENT_INVENTORY_ITEM)
                    .table(InventoryItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLACEMENT_ITEM_ID)
                    .table(InventoryItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLACEMENT_INVENTORY_ID)
                    .table(InventoryItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryItems {
    Table,
    Id,
    InventoryId,
    ItemId,
    AccessLevel,
    IsLink,
}
