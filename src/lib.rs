//! Core engine for a multi-tenant personal-inventory catalog.
//!
//! This crate owns the access-control and item-visibility rules of the
//! application: who can see which items, how queries over a viewer's or a
//! stranger's catalog are scoped, and how items move between inventories
//! without breaking placement invariants. HTTP routing, session handling,
//! template rendering, and image byte storage live outside; they call in
//! through the service layer and receive typed results.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
