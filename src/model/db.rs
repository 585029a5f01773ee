//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application. They keep service signatures short and give call sites a
//! single point of reference instead of importing from the generated
//! `entity` crate directly.

/// Type alias for the user database model.
///
/// A registered account. Users own items, inventories, and the per-user
/// taxonomy rows (item types, locations, tags, fields).
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login and profile name
/// - `email` - Unique contact address
/// - `password_hash` - Credential digest, opaque to this crate
/// - `activated` - Whether the activation token was redeemed
/// - `token` - Ephemeral activation or password-reset token
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::user::Model;

/// Type alias for the inventory database model.
///
/// A named container of item placements. Every user owns exactly one hidden
/// default inventory that items fall back to; it never shows up in listings.
///
/// # Fields (from `entity::inventory::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `slug` - URL segment, unique per owner
/// - `description` - Free-text description
/// - `owner_id` - Foreign key to the owning user
/// - `visibility` - `Private` or `Public`
/// - `token` - Secret share token; presenting it grants viewer membership
/// - `short_code` - Short random code for compact URLs
/// - `is_default` - Marks the hidden per-user fallback inventory
/// - `field_template_id` - Optional attached field template
/// - `created_at` - Timestamp when the inventory was created
pub type InventoryModel = entity::inventory::Model;

/// Type alias for the inventory membership database model.
///
/// Grants one user one access level on one inventory. The owner always holds
/// an `Owner` row; collaborators and viewers are added through sharing.
///
/// # Fields (from `entity::membership::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the member
/// - `inventory_id` - Foreign key to the inventory
/// - `access_level` - The member's level on this inventory
/// - `created_at` - Timestamp when the membership was granted
pub type MembershipModel = entity::membership::Model;

/// Type alias for the item database model.
///
/// A cataloged object, owned by one user and placed into inventories through
/// [`PlacementModel`] rows.
///
/// # Fields (from `entity::item::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `slug` - `"{id}-{slugified name}"`, unique
/// - `description` - Free-text description
/// - `quantity` - How many of the object the user holds
/// - `item_type_id` - Foreign key to the item's classification
/// - `location_id` - Foreign key to the item's default location
/// - `specific_location` - Free-text refinement of the location
/// - `user_id` - Foreign key to the owning user
/// - `main_image` - Optional file name of the designated primary image
/// - `short_code` - Short random code for compact URLs
/// - `created_at` - Timestamp when the item was created
/// - `updated_at` - Timestamp of the last item update
pub type ItemModel = entity::item::Model;

/// Type alias for the inventory-item placement database model.
///
/// Joins an item into an inventory. The single `is_link = false` row is the
/// item's home; `is_link = true` rows reference the same item from other
/// inventories. Each row carries its own access level, so one placement can
/// expose an item more or less widely than its container.
///
/// # Fields (from `entity::inventory_item::Model`)
/// - `id` - Primary key
/// - `inventory_id` - Foreign key to the containing inventory
/// - `item_id` - Foreign key to the placed item
/// - `access_level` - Exposure of this placement
/// - `is_link` - `false` for the home placement, `true` for references
pub type PlacementModel = entity::inventory_item::Model;

/// Type alias for the item type database model. Per-user classification rows;
/// each user has a sentinel `"none"` type that deletions fall back to.
pub type ItemTypeModel = entity::item_type::Model;

/// Type alias for the location database model. Per-user storage places; each
/// user has a sentinel `"None"` location that deletions fall back to.
pub type LocationModel = entity::location::Model;

/// Type alias for the tag database model. Per-user labels, unique by value.
pub type TagModel = entity::tag::Model;

/// Type alias for the symmetric item relation database model. Pairs are
/// stored as two reciprocal rows.
pub type RelatedItemModel = entity::related_item::Model;

/// Type alias for the custom field definition database model.
pub type FieldModel = entity::field::Model;

/// Type alias for the field template database model. A named, ordered set of
/// fields that can be attached to inventories.
pub type FieldTemplateModel = entity::field_template::Model;

/// Type alias for the template membership database model, ordering fields
/// within a template.
pub type TemplateFieldModel = entity::template_field::Model;

/// Type alias for the per-item custom field value database model. Carries a
/// `visible` flag so template attachment can hide values without destroying
/// them.
pub type ItemFieldModel = entity::item_field::Model;

/// Type alias for the uploaded image database model. Stores the file name
/// only; bytes live on disk under the owner's image directory.
pub type ImageModel = entity::image::Model;

/// Type alias for the item-image join database model.
pub type ItemImageModel = entity::item_image::Model;

/// Type alias for the notification database model. Short messages raised by
/// sharing events.
pub type NotificationModel = entity::notification::Model;
