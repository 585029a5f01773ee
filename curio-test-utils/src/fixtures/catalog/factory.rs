//! Factory functions for generating in-memory catalog models.
//!
//! Pure functions returning entity models with standard test values, for
//! unit tests that need model instances without touching a database.

use chrono::Utc;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

use crate::model::{InventoryModel, MembershipModel};

/// Create a mock inventory database model for testing.
///
/// # Arguments
/// - `id` - The inventory ID
/// - `owner_id` - The owning user's ID
/// - `visibility` - Whether the inventory is private or public
///
/// # Returns
/// - `InventoryModel` - An inventory model with test data
pub fn mock_inventory_model(
    id: i32,
    owner_id: i32,
    visibility: InventoryVisibility,
) -> InventoryModel {
    InventoryModel {
        id,
        name: "Test Inventory".to_string(),
        slug: "test-inventory".to_string(),
        description: String::new(),
        owner_id,
        visibility,
        token: format!("token-{id}"),
        short_code: format!("sc-{id}"),
        is_default: false,
        field_template_id: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock membership database model for testing.
///
/// # Arguments
/// - `user_id` - The member's user ID
/// - `inventory_id` - The inventory the membership grants access to
/// - `access_level` - The granted level
///
/// # Returns
/// - `MembershipModel` - A membership model with test data
pub fn mock_membership_model(
    user_id: i32,
    inventory_id: i32,
    access_level: AccessLevel,
) -> MembershipModel {
    MembershipModel {
        id: 1,
        user_id,
        inventory_id,
        access_level,
        created_at: Utc::now().naive_utc(),
    }
}
