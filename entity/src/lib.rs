pub mod prelude;

pub mod access_level;
pub mod field;
pub mod field_template;
pub mod image;
pub mod inventory;
pub mod inventory_item;
pub mod item;
pub mod item_field;
pub mod item_image;
pub mod item_tag;
pub mod item_type;
pub mod location;
pub mod membership;
pub mod notification;
pub mod related_item;
pub mod tag;
pub mod template_field;
pub mod user;
