//! A named container of item placements, private or public, shareable by token.

use sea_orm::entity::prelude::*;

/// Whether an inventory is listed and browsable without an explicit share.
///
/// This is deliberately distinct from [`super::access_level::AccessLevel`]:
/// the container is either private or public, while memberships and item
/// placements carry the four-level order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum InventoryVisibility {
    #[sea_orm(num_value = 0)]
    Private,
    #[sea_orm(num_value = 1)]
    Public,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// URL path segment, unique per owner rather than globally.
    pub slug: String,
    pub description: String,
    pub owner_id: i32,
    pub visibility: InventoryVisibility,
    /// Capability secret: anyone presenting it may join as a viewer.
    pub token: String,
    pub short_code: String,
    /// The hidden per-user inventory items fall back to; one per owner,
    /// excluded from listings and counts.
    pub is_default: bool,
    pub field_template_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::field_template::Entity",
        from = "Column::FieldTemplateId",
        to = "super::field_template::Column::Id"
    )]
    FieldTemplate,
    #[sea_orm(has_many = "super::membership::Entity")]
    Memberships,
    #[sea_orm(has_many = "super::inventory_item::Entity")]
    Placements,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::field_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldTemplate.def()
    }
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Placements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
