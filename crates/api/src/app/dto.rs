use serde::Serialize;

use paintcalc_catalog::YieldBasis;
use paintcalc_core::ProductId;
use paintcalc_estimation::{CoverageEstimate, OptionGroup};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductId>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub product_id: ProductId,
    pub yield_basis: YieldBasis,
    pub groups: Vec<OptionGroup>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub product_id: ProductId,
    pub area_m2: f64,
    pub coat_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_class: Option<String>,
    pub yield_basis: YieldBasis,
    pub per_coat_yield: f64,
    /// Unrounded; `total_liters_display` is the two-decimal rendering.
    pub total_liters: f64,
    pub total_liters_display: String,
    pub container_size_liters: f64,
    pub container_count: u64,
    pub summary: String,
}

impl From<CoverageEstimate> for EstimateResponse {
    fn from(estimate: CoverageEstimate) -> Self {
        let summary = estimate.to_string();
        let result = estimate.result;
        Self {
            product_id: estimate.product_id,
            area_m2: estimate.area_m2,
            coat_count: estimate.coat_count,
            surface_class: estimate.surface_class,
            yield_basis: estimate.yield_basis,
            per_coat_yield: result.per_coat_yield,
            total_liters: result.total_liters,
            total_liters_display: result.total_liters_display(),
            container_size_liters: estimate.container_size_liters,
            container_count: result.container_count,
            summary,
        }
    }
}
