//! End-to-end tests across the service layer.
//!
//! Unit tests next to each service cover single methods; the tests here drive
//! whole flows through scope resolution, queries, and mutations together and
//! check the properties that must hold across service boundaries: exposure
//! levels only ever widen visibility, links track their item while copies do
//! not, private inventories leak nothing, every item keeps exactly one home
//! placement, and deletions leave no dangling references behind.

mod access_levels;
mod cleanup;
mod placements;
mod relations;
mod search;
mod visibility;

use curio::util::{code, images::ImageStore};

/// Image store rooted in a scratch directory, for services that take one.
pub fn scratch_images() -> ImageStore {
    ImageStore::new(std::env::temp_dir().join(format!("curio-tests-{}", code::share_token())))
}
