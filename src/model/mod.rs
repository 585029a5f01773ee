//! Application models and type definitions.
//!
//! This module contains the typed shapes the service layer exchanges with its
//! callers: database model type aliases, resolved visibility scopes, item
//! query inputs and result rows, and inventory summaries. These models bridge
//! the gap between database entities and the presentation layer without
//! exposing query internals.

pub mod db;
pub mod inventory;
pub mod item;
pub mod scope;
