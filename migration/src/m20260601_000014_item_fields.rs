use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;
use crate::m20260601_000007_items::Items;
use crate::m20260601_000012_fields::Fields;

static FK_ITEM_FIELD_FIELD_ID: &str = "fk-item_fields-field_id";
static FK_ITEM_FIELD_ITEM_ID: &str = "fk-item_fields-item_id";
static FK_ITEM_FIELD_USER_ID: &str = "fk-item_fields-user_id";
static IDX_ITEM_FIELD_FIELD_ITEM: &str = "idx-item_fields-field_id-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemFields::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemFields::Id))
                    .col(integer(ItemFields::FieldId))
                    .col(integer(ItemFields::ItemId))
                    .col(text(ItemFields::Value))
                    .col(boolean(ItemFields::Visible))
                    .col(integer(ItemFields::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_FIELD_FIELD_ID)
                    .from_tbl(ItemFields::Table)
                    .from_col(ItemFields::FieldId)
                    .to_tbl(Fields::Table)
                    .to_col(Fields::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_FIELD_ITEM_ID)
                    .from_tbl(ItemFields::Table)
                    .from_col(ItemFields::ItemId)
                    .to_tbl(Items::Table)
                    .to_col(Items::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_FIELD_USER_ID)
                    .from_tbl(ItemFields::Table)
                    .from_col(ItemFields::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_FIELD_FIELD_ITEM)
                    .table(ItemFields::Table)
                    .col(ItemFields::FieldId)
                    .col(ItemFields::ItemId)
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
                    .name(IDX_ITEM_FIELD_FIELD_ITEM)
                    .table(ItemFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_FIELD_USER_ID)
                    .table(ItemFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_FIELD_ITEM_ID)
                    .table(ItemFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_FIELD_FIELD_ID)
                    .table(ItemFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemFields::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemFields {
    Table,
    Id,
    FieldId,
    ItemId,
    Value,
    Visible,
    UserId,
}
