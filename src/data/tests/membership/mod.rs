use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

use curio_test_utils::prelude::*;

use crate::data::membership::MembershipRepository;

mod create;
mod delete_for_inventory;
mod get;
mod update_level;
