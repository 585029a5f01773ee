//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the SeaORM entity models used throughout the test
//! utilities. These match the aliases in the main curio crate so fixtures and
//! tests read the same way as production code.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the inventory database model.
pub type InventoryModel = entity::inventory::Model;

/// Type alias for the inventory membership database model.
pub type MembershipModel = entity::membership::Model;

/// Type alias for the item database model.
pub type ItemModel = entity::item::Model;

/// Type alias for the inventory-item placement database model.
pub type PlacementModel = entity::inventory_item::Model;

/// Type alias for the item type database model.
pub type ItemTypeModel = entity::item_type::Model;

/// Type alias for the location database model.
pub type LocationModel = entity::location::Model;

/// Type alias for the tag database model.
pub type TagModel = entity::tag::Model;

/// Type alias for the custom field definition database model.
pub type FieldModel = entity::field::Model;

/// Type alias for the field template database model.
pub type FieldTemplateModel = entity::field_template::Model;

/// Type alias for the per-item custom field value database model.
pub type ItemFieldModel = entity::item_field::Model;

/// Type alias for the uploaded image database model.
pub type ImageModel = entity::image::Model;
