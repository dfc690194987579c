//! Coverage resolution & estimation engine.
//!
//! Pipeline: a product is looked up in the [`Catalog`](paintcalc_catalog::Catalog),
//! [`options`] describes what must be asked for it, [`validation`] gates and
//! completes the caller's answers, and [`calculator`] turns area + yield + coats
//! into liters and a container count. [`engine::CoverageEngine`] wires the steps
//! behind the three public calls.
//!
//! Everything here is deterministic and side-effect free (no IO, no logging).

pub mod calculator;
pub mod engine;
pub mod options;
pub mod validation;

pub use calculator::{CoverageResult, compute_coverage};
pub use engine::{CoverageEngine, CoverageEstimate};
pub use options::{CoatCountGroup, OptionGroup, SurfaceClassChoice, SurfaceClassGroup, resolve_option_groups};
pub use validation::{AreaInput, EstimateRequest, ResolvedSelection, SelectionMode, ValidatedRequest, validate};
