use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;

static FK_FIELD_TEMPLATE_USER_ID: &str = "fk-field_templates-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FieldTemplates::Table)
                    .if_not_exists()
                    .col(pk_auto(FieldTemplates::Id))
                    .col(string(FieldTemplates::Name))
                    .col(integer(FieldTemplates::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIELD_TEMPLATE_USER_ID)
                    .from_tbl(FieldTemplates::Table)
                    .from_col(FieldTemplates::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FIELD_TEMPLATE_USER_ID)
                    .table(FieldTemplates::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FieldTemplates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FieldTemplates {
    Table,
    Id,
    Name,
    UserId,
}
