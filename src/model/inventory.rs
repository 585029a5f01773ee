//! Inventory listing summaries and mutation inputs.

use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

/// One inventory as shown in catalog listings: the inventory's own columns
/// plus its owner's username, its item count, and the viewer's access level
/// when the viewer holds a membership on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    /// Inventory id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// URL slug, unique per owner.
    pub slug: String,
    /// Free-text description.
    pub description: String,
    /// Owning user id.
    pub owner_id: i32,
    /// Owning user's username.
    pub owner_username: String,
    /// Whether the inventory is publicly browsable.
    pub visibility: InventoryVisibility,
    /// Number of items placed in the inventory.
    pub item_count: u64,
    /// The viewer's level on this inventory, when a membership exists.
    pub viewer_level: Option<AccessLevel>,
}

/// Input for creating an inventory.
#[derive(Debug, Clone)]
pub struct InventoryDraft {
    /// Display name; the slug is derived from it.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Initial visibility.
    pub visibility: InventoryVisibility,
}

impl InventoryDraft {
    /// A private inventory with the given name and no description.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility: InventoryVisibility::Private,
        }
    }
}

/// Input for updating an inventory. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct InventoryPatch {
    /// New display name; the slug is re-derived on rename.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New visibility.
    pub visibility: Option<InventoryVisibility>,
}
