use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

use curio_test_utils::prelude::*;

use crate::data::placement::PlacementRepository;

mod delete_links_in_inventory;
mod get_home;
mod list_home_item_ids;
mod repoint;
