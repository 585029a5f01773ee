pub use sea_orm_migration::prelude::*;

mod m20260601_000001_users;
mod m20260601_000002_locations;
mod m20260601_000003_item_types;
mod m20260601_000004_field_templates;
mod m20260601_000005_inventories;
mod m20260601_000006_inventory_members;
mod m20260601_000007_items;
mod m20260601_000008_inventory_items;
mod m20260601_000009_tags;
mod m20260601_000010_item_tags;
mod m20260601_000011_related_items;
mod m20260601_000012_fields;
mod m20260601_000013_template_fields;
mod m20260601_000014_item_fields;
mod m20260601_000015_images;
mod m20260601_000016_item_images;
mod m20260601_000017_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_users::Migration),
            Box::new(m20260601_000002_locations::Migration),
            Box::new(m20260601_000003_item_types::Migration),
            Box::new(m20260601_000004_field_templates::Migration),
            Box::new(m20260601_000005_inventories::Migration),
            Box::new(m20260601_000006_inventory_members::Migration),
            Box::new(m20260601_000007_items::Migration),
            Box::new(m20260601_000008_inventory_items::Migration),
            Box::new(m20260601_000009_tags::Migration),
            Box::new(m20260601_000010_item_tags::Migration),
            Box::new(m20260601_000011_related_items::Migration),
            Box::new(m20260601_000012_fields::Migration),
            Box::new(m20260601_000013_template_fields::Migration),
            Box::new(m20260601_000014_item_fields::Migration),
            Box::new(m20260601_000015_images::Migration),
            Box::new(m20260601_000016_item_images::Migration),
            Box::new(m20260601_000017_notifications::Migration),
        ]
    }
}
