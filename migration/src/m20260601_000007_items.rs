use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_users::Users;
use crate::m20260601_000002_locations::Locations;
use crate::m20260601_000003_item_types::ItemTypes;

static FK_ITEM_USER_ID: &str = "fk-items-user_id";
static FK_ITEM_ITEM_TYPE_ID: &str = "fk-items-item_type_id";
static FK_ITEM_LOCATION_ID: &str = "fk-items-location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(string(Items::Name))
                    .col(string_uniq(Items::Slug))
                    .col(text(Items::Description))
                    .col(integer(Items::Quantity))
                    .col(integer(Items::ItemTypeId))
                    .col(integer(Items::LocationId))
                    .col(string(Items::SpecificLocation))
                    .col(integer(Items::UserId))
                    .col(string_null(Items::MainImage))
                    .col(string(Items::ShortCode))
                    .col(timestamp(Items::CreatedAt))
                    .col(timestamp(Items::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_USER_ID)
                    .from_tbl(Items::Table)
                    .from_col(Items::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_ITEM_TYPE_ID)
                    .from_tbl(Items::Table)
                    .from_col(Items::ItemTypeId)
                    .to_tbl(ItemTypes::Table)
                    .to_col(ItemTypes::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_LOCATION_ID)
                    .from_tbl(Items::Table)
                    .from_col(Items::LocationId)
                    .to_tbl(Locations::Table)
                    .to_col(Locations::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_LOCATION_ID)
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_ITEM_TYPE_ID)
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_USER_ID)
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Items {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Quantity,
    ItemTypeId,
    LocationId,
    SpecificLocation,
    UserId,
    MainImage,
    ShortCode,
    CreatedAt,
    UpdatedAt,
}
