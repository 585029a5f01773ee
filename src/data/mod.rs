//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, organized by domain: accounts, inventories and memberships,
//! items and their placements, taxonomy (types, locations, tags), custom
//! fields and templates, images, relations, and notifications.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so callers
//! can pass either the pooled connection or an open transaction; multi-write
//! services run all their repository calls on one transaction and commit it
//! as a unit.

pub mod field;
pub mod image;
pub mod inventory;
pub mod item;
pub mod item_type;
pub mod location;
pub mod membership;
pub mod notification;
pub mod placement;
pub mod relation;
pub mod tag;
pub mod template;
pub mod user;

#[cfg(test)]
mod tests;
