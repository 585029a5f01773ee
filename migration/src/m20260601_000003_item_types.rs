use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;

static FK_ITEM_TYPE_USER_ID: &str = "fk-item_types-user_id";
static IDX_ITEM_TYPE_NAME_USER: &str = "idx-item_types-name-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemTypes::Id))
                    .col(string(ItemTypes::Name))
                    .col(integer(ItemTypes::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_TYPE_USER_ID)
                    .from_tbl(ItemTypes::Table)
                    .from_col(ItemTypes::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_TYPE_NAME_USER)
                    .table(ItemTypes::Table)
                    .col(ItemTypes::Name)
                    .col(ItemTypes::UserId)
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
                    .name(IDX_ITEM_TYPE_NAME_USER)
                    .table(ItemTypes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_TYPE_USER_ID)
                    .table(ItemTypes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemTypes {
    Table,
    Id,
    Name,
    UserId,
}
