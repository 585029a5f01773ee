//! Per-user custom field definition; values attach to items via `item_field`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Slug doubles as the search modifier ("warranty:2027" finds values of
    /// the field with slug "warranty").
    pub slug: String,
    pub kind: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::item_field::Entity")]
    Values,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::item_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Values.def()
    }
}

impl Related<super::field_template::Entity> for Entity {
    fn to() -> RelationDef {
        super::template_field::Relation::Template.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::template_field::Relation::Field.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
