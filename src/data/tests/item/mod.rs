use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;

use curio_test_utils::prelude::*;

use crate::data::item::{ItemChanges, ItemRepository, ItemSearchCriteria, NewItem, ScopeFilter};
use crate::model::item::{ItemKey, ItemSort, SortDirection};

mod count;
mod create;
mod reassign_item_type;
mod search;
mod update;
