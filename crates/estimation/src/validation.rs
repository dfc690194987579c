//! Request validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. the product is given and exists,
//! 2. the area is given, parses and is strictly positive,
//! 3. the coat count (if given) is allowed, otherwise the default is used,
//! 4. surface-class products have a valid yield value; a missing one is an error
//!    in [`SelectionMode::Interactive`] and replaced by the default in
//!    [`SelectionMode::Batch`].

use serde::{Deserialize, Serialize};

use paintcalc_catalog::{Catalog, Entity, ProductEntry, SurfaceClassOption};
use paintcalc_core::{ProductId, ValidationError, ValidationResult};

/// How to treat a missing surface class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// A person is answering; absorption class changes the result too much to guess.
    #[default]
    Interactive,
    /// Non-interactive use; fall back to the resolved default class.
    Batch,
}

/// Raw area as supplied by the caller (m²).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    Value(f64),
    Text(String),
}

impl AreaInput {
    /// Parse and check the area.
    pub fn parse(&self) -> ValidationResult<f64> {
        let value = match self {
            AreaInput::Value(value) => *value,
            AreaInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ValidationError::invalid_area("area is required"));
                }
                text.parse::<f64>().map_err(|_| {
                    ValidationError::invalid_area(format!("'{text}' is not a number"))
                })?
            }
        };
        check_area(value)?;
        Ok(value)
    }
}

impl From<f64> for AreaInput {
    fn from(value: f64) -> Self {
        AreaInput::Value(value)
    }
}

impl From<&str> for AreaInput {
    fn from(value: &str) -> Self {
        AreaInput::Text(value.to_string())
    }
}

impl From<String> for AreaInput {
    fn from(value: String) -> Self {
        AreaInput::Text(value)
    }
}

/// Area must be a finite number strictly greater than zero.
pub fn check_area(area_m2: f64) -> ValidationResult<()> {
    if !area_m2.is_finite() {
        return Err(ValidationError::invalid_area("area must be a finite number"));
    }
    if area_m2 <= 0.0 {
        return Err(ValidationError::invalid_area("area must be greater than zero"));
    }
    Ok(())
}

/// One estimate request as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Missing or blank reads as an unknown product.
    #[serde(default)]
    pub product_id: String,
    /// `None` (absent or `null`) is reported as an invalid area.
    #[serde(default)]
    pub area: Option<AreaInput>,
    #[serde(default)]
    pub coat_count: Option<u32>,
    #[serde(default)]
    pub yield_value: Option<f64>,
    #[serde(default)]
    pub mode: SelectionMode,
}

impl EstimateRequest {
    pub fn new(product_id: impl Into<String>, area: impl Into<AreaInput>) -> Self {
        Self {
            product_id: product_id.into(),
            area: Some(area.into()),
            coat_count: None,
            yield_value: None,
            mode: SelectionMode::Interactive,
        }
    }

    pub fn with_coat_count(mut self, coats: u32) -> Self {
        self.coat_count = Some(coats);
        self
    }

    pub fn with_yield_value(mut self, value: f64) -> Self {
        self.yield_value = Some(value);
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Fully resolved choices for one product.
///
/// `yield_value` is `Some` exactly when the product's yield depends on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub product_id: ProductId,
    pub coat_count: u32,
    pub yield_value: Option<f64>,
}

/// A request that passed validation, borrowing its catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest<'c> {
    pub entry: &'c ProductEntry,
    pub area_m2: f64,
    pub selection: ResolvedSelection,
}

/// Validate `request` against `catalog`, substituting defaults where allowed.
pub fn validate<'c>(
    catalog: &'c Catalog,
    request: &EstimateRequest,
) -> ValidationResult<ValidatedRequest<'c>> {
    if request.product_id.trim().is_empty() {
        return Err(ValidationError::ProductNotFound(ProductId::new(
            request.product_id.as_str(),
        )));
    }
    let entry = catalog.lookup(&request.product_id)?;
    let area_m2 = request
        .area
        .as_ref()
        .ok_or_else(|| ValidationError::invalid_area("area is required"))?
        .parse()?;

    let coat_count = match request.coat_count {
        Some(coats) => {
            check_coat_count(entry, coats)?;
            coats
        }
        None => entry.default_coat_count(),
    };

    let yield_value = resolve_surface_class(entry, request.yield_value, request.mode)?
        .map(SurfaceClassOption::value);

    Ok(ValidatedRequest {
        entry,
        area_m2,
        selection: ResolvedSelection {
            product_id: entry.id().clone(),
            coat_count,
            yield_value,
        },
    })
}

/// The coat count must be one of the entry's declared options.
pub fn check_coat_count(entry: &ProductEntry, coats: u32) -> ValidationResult<()> {
    if entry.allows_coat_count(coats) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoatCount {
            product_id: entry.id().clone(),
            requested: coats,
            allowed: entry.coat_options().to_vec(),
        })
    }
}

/// Resolve the caller's yield value into one of the entry's surface classes.
///
/// Returns `Ok(None)` for fixed-yield products, whose yield never comes from the
/// caller; a stray value is dropped.
pub fn resolve_surface_class(
    entry: &ProductEntry,
    yield_value: Option<f64>,
    mode: SelectionMode,
) -> ValidationResult<Option<&SurfaceClassOption>> {
    let kind = entry.yield_kind();
    if !kind.requires_surface_class() {
        return Ok(None);
    }

    match (yield_value, mode) {
        (Some(value), _) => kind
            .surface_class_by_value(value)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidSurfaceClass {
                product_id: entry.id().clone(),
                value,
            }),
        (None, SelectionMode::Batch) => Ok(kind.default_surface_class()),
        (None, SelectionMode::Interactive) => {
            Err(ValidationError::MissingSurfaceClass(entry.id().clone()))
        }
    }
}
