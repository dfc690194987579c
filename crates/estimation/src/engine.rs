//! Engine facade: the three calls a presentation layer needs.

use serde::Serialize;

use paintcalc_catalog::{Catalog, Entity, YieldBasis};
use paintcalc_core::{ProductId, ValidationResult};

use crate::calculator::{CoverageResult, compute_coverage};
use crate::options::{OptionGroup, resolve_option_groups};
use crate::validation::{EstimateRequest, validate};

/// Coverage estimation over an immutable catalog.
///
/// Holds no mutable state, so one instance can serve concurrent callers
/// (e.g. behind an `Arc`).
#[derive(Debug, Clone)]
pub struct CoverageEngine {
    catalog: Catalog,
}

/// A computed estimate plus the resolved inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEstimate {
    pub product_id: ProductId,
    pub area_m2: f64,
    pub coat_count: u32,
    /// Label of the chosen surface class, for surface-dependent products.
    pub surface_class: Option<String>,
    pub yield_basis: YieldBasis,
    pub container_size_liters: f64,
    pub result: CoverageResult,
}

impl CoverageEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Product ids in catalog order, for populating a selector.
    pub fn list_products(&self) -> Vec<ProductId> {
        self.catalog.product_ids().cloned().collect()
    }

    /// Option groups for a product, or `ProductNotFound`.
    pub fn resolve_option_groups(&self, product_id: &str) -> ValidationResult<Vec<OptionGroup>> {
        let entry = self.catalog.lookup(product_id)?;
        Ok(resolve_option_groups(entry))
    }

    /// Validate `request` and compute its coverage.
    pub fn compute_coverage(&self, request: &EstimateRequest) -> ValidationResult<CoverageEstimate> {
        let validated = validate(&self.catalog, request)?;
        let entry = validated.entry;
        let result = compute_coverage(entry, &validated.selection, validated.area_m2)?;

        let surface_class = validated
            .selection
            .yield_value
            .and_then(|value| entry.yield_kind().surface_class_by_value(value))
            .map(|option| option.label().to_string());

        Ok(CoverageEstimate {
            product_id: entry.id().clone(),
            area_m2: validated.area_m2,
            coat_count: validated.selection.coat_count,
            surface_class,
            yield_basis: entry.yield_basis(),
            container_size_liters: entry.container_size_liters(),
            result,
        })
    }
}

impl Default for CoverageEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl core::fmt::Display for CoverageEstimate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Product: {}", self.product_id)?;
        writeln!(f, "Area: {} m²", self.area_m2)?;
        writeln!(f, "Coats: {}", self.coat_count)?;
        if let Some(label) = &self.surface_class {
            writeln!(f, "Surface: {label}")?;
        }
        writeln!(
            f,
            "Base yield (approx.): {} m²/L {}",
            self.result.per_coat_yield, self.yield_basis
        )?;
        writeln!(f, "Estimated consumption: {} L", self.result.total_liters_display())?;
        write!(
            f,
            "Containers ({} L): {}",
            self.container_size_liters, self.result.container_count
        )
    }
}
