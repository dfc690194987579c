//! `paintcalc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and the
//! estimation engine (no infrastructure concerns, no IO, no logging).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, index_by_id};
pub use error::{CatalogError, CatalogResult, ValidationError, ValidationResult};
pub use id::ProductId;
