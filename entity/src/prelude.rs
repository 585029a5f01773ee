pub use super::access_level::AccessLevel;
pub use super::field::Entity as Field;
pub use super::field_template::Entity as FieldTemplate;
pub use super::image::Entity as Image;
pub use super::inventory::Entity as Inventory;
pub use super::inventory::InventoryVisibility;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::item::Entity as Item;
pub use super::item_field::Entity as ItemField;
pub use super::item_image::Entity as ItemImage;
pub use super::item_tag::Entity as ItemTag;
pub use super::item_type::Entity as ItemType;
pub use super::location::Entity as Location;
pub use super::membership::Entity as Membership;
pub use super::notification::Entity as Notification;
pub use super::related_item::Entity as RelatedItem;
pub use super::tag::Entity as Tag;
pub use super::template_field::Entity as TemplateField;
pub use super::user::Entity as User;
