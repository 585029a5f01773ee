//! Service layer for catalog business logic and orchestration.
//!
//! This module contains the service layer that implements access rules,
//! coordinates between repositories, and handles multi-step catalog
//! operations inside transactions. Services include scope resolution, item
//! queries and mutations, placements, inventories, sharing, taxonomy,
//! field templates, accounts, and notifications.

pub mod inventory;
pub mod item;
pub mod notification;
pub mod placement;
pub mod query;
pub mod relation;
pub mod scope;
pub mod sharing;
pub mod taxonomy;
pub mod template;
pub mod user;
