use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;
use crate::m20260601_000004_field_templates::FieldTemplates;

static FK_INVENTORY_OWNER_ID: &str = "fk-inventories-owner_id";
static FK_INVENTORY_FIELD_TEMPLATE_ID: &str = "fk-inventories-field_template_id";
static IDX_INVENTORY_OWNER_SLUG: &str = "idx-inventories-owner_id-slug";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventories::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventories::Id))
                    .col(string(Inventories::Name))
                    .col(string(Inventories::Slug))
                    .col(text(Inventories::Description))
                    .col(integer(Inventories::OwnerId))
                    .col(integer(Inventories::Visibility))
                    .col(string(Inventories::Token))
                    .col(string(Inventories::ShortCode))
                    .col(boolean(Inventories::IsDefault))
                    .col(integer_null(Inventories::FieldTemplateId))
                    .col(timestamp(Inventories::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_OWNER_ID)
                    .from_tbl(Inventories::Table)
                    .from_col(Inventories::OwnerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_FIELD_TEMPLATE_ID)
                    .from_tbl(Inventories::Table)
                    .from_col(Inventories::FieldTemplateId)
                    .to_tbl(FieldTemplates::Table)
                    .to_col(FieldTemplates::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_OWNER_SLUG)
                    .table(Inventories::Table)
                    .col(Inventories::OwnerId)
                    .col(Inventories::Slug)
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
                    .name(IDX_INVENTORY_OWNER_SLUG)
                    .table(Inventories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVENTORY_FIELD_TEMPLATE_ID)
                    .table(Inventories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVENTORY_OWNER_ID)
                    .table(Inventories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inventories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Inventories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    OwnerId,
    Visibility,
    Token,
    ShortCode,
    IsDefault,
    FieldTemplateId,
    CreatedAt,
}
