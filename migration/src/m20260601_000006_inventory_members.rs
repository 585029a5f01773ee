use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;
use crate::m20260601_000005_inventories::Inventories;

static FK_MEMBER_USER_ID: &str = "fk-inventory_members-user_id";
static FK_MEMBER_INVENTORY_ID: &str = "fk-inventory_members-inventory_id";
static IDX_MEMBER_USER_INVENTORY: &str = "idx-inventory_members-user_id-inventory_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryMembers::Id))
                    .col(integer(InventoryMembers::UserId))
                    .col(integer(InventoryMembers::InventoryId))
                    .col(integer(InventoryMembers::AccessLevel))
                    .col(timestamp(InventoryMembers::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_USER_ID)
                    .from_tbl(InventoryMembers::Table)
                    .from_col(InventoryMembers::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_INVENTORY_ID)
                    .from_tbl(InventoryMembers::Table)
                    .from_col(InventoryMembers::InventoryId)
                    .to_tbl(Inventories::Table)
                    .to_col(Inventories::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_USER_INVENTORY)
                    .table(InventoryMembers::Table)
                    .col(InventoryMembers::UserId)
                    .col(InventoryMembers::InventoryId)
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
                    .name(IDX_MEMBER_USER_INVENTORY)
                    .table(InventoryMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEMBER_INVENTORY_ID)
                    .table(InventoryMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEMBER_USER_ID)
                    .table(InventoryMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryMembers {
    Table,
    Id,
    UserId,
    InventoryId,
    AccessLevel,
    CreatedAt,
}
