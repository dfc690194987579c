//! Product catalog: paint formulations and their declared yield schema.
//!
//! The catalog is built once (from the built-in table or a JSON document),
//! validated eagerly, and then only ever read. Nothing in this crate performs IO.

pub mod builtin;
pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogDocument};
pub use paintcalc_core::Entity;
pub use product::{ProductEntry, SurfaceClassOption, YieldBasis, YieldKind};
