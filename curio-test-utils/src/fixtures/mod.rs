//! Test fixture modules for database record creation.
//!
//! Each submodule hangs an accessor off [`crate::TestSetup`] that inserts
//! ready-made records into the test database:
//!
//! - `user` - accounts with their signup defaults (default inventory,
//!   sentinel taxonomy rows)
//! - `catalog` - inventories, items, placements, tags, fields, images

pub mod catalog;
pub mod user;
