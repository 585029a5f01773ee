use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000004_field_templates::FieldTemplates;
use crate::m20260601_000012_fields::Fields;

static FK_TEMPLATE_FIELD_TEMPLATE_ID: &str = "fk-template_fields-template_id";
static FK_TEMPLATE_FIELD_FIELD_ID: &str = "fk-template_fields-field_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemplateFields::Table)
                    .if_not_exists()
                    .col(integer(TemplateFields::TemplateId))
                    .col(integer(TemplateFields::FieldId))
                    .col(integer(TemplateFields::Position))
                    .primary_key(
                        Index::create()
                            .col(TemplateFields::TemplateId)
                            .col(TemplateFields::FieldId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEMPLATE_FIELD_TEMPLATE_ID)
                    .from_tbl(TemplateFields::Table)
                    .from_col(TemplateFields::TemplateId)
                    .to_tbl(FieldTemplates::Table)
                    .to_col(FieldTemplates::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEMPLATE_FIELD_FIELD_ID)
                    .from_tbl(TemplateFields::Table)
                    .from_col(TemplateFields::FieldId)
                    .to_tbl(Fields::Table)
                    .to_col(Fields::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEMPLATE_FIELD_FIELD_ID)
                    .table(TemplateFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEMPLATE_FIELD_TEMPLATE_ID)
                    .table(TemplateFields::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TemplateFields::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TemplateFields {
    Table,
    TemplateId,
    FieldId,
    Position,
}
