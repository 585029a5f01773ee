use entity::inventory::InventoryVisibility;

use curio_test_utils::prelude::*;

use crate::data::inventory::{InventoryChanges, InventoryRepository, NewInventory};

mod create;
mod detach_template_everywhere;
mod get_by_slug;
mod list_public_for_owner;
