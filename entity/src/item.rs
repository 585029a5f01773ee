//! A cataloged object. Owned by one user; placed into inventories via
//! `inventory_item` rows, so the same item can appear in several containers.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// "{id}-{slugified name}", assigned right after insert.
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    pub quantity: i32,
    pub item_type_id: i32,
    pub location_id: i32,
    /// Free-text refinement of the location ("top shelf", "bin 3").
    pub specific_location: String,
    pub user_id: i32,
    pub main_image: Option<String>,
    pub short_code: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::item_type::Entity",
        from = "Column::ItemTypeId",
        to = "super::item_type::Column::Id"
    )]
    ItemType,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::inventory_item::Entity")]
    Placements,
    #[sea_orm(has_many = "super::item_field::Entity")]
    FieldValues,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::item_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemType.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Placements.def()
    }
}

impl Related<super::item_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldValues.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_tag::Relation::Item.def().rev())
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_image::Relation::Image.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_image::Relation::Item.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
