use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;

static FK_TAG_USER_ID: &str = "fk-tags-user_id";
static IDX_TAG_VALUE_USER: &str = "idx-tags-value-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(pk_auto(Tags::Id))
                    .col(string(Tags::Value))
                    .col(integer(Tags::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_USER_ID)
                    .from_tbl(Tags::Table)
                    .from_col(Tags::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_VALUE_USER)
                    .table(Tags::Table)
                    .col(Tags::Value)
                    .col(Tags::UserId)
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
                    .name(IDX_TAG_VALUE_USER)
                    .table(Tags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TAG_USER_ID)
                    .table(Tags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tags {
    Table,
    Id,
    Value,
    UserId,
}
