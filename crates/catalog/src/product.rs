use serde::{Deserialize, Serialize};

use paintcalc_core::{CatalogError, CatalogResult, Entity, ProductId};

/// Substrings that mark a surface class label as the "medium absorption" one.
///
/// Matched case-insensitively. Only consulted when no option carries an explicit
/// `default` flag.
const MEDIUM_LABEL_MARKERS: &[&str] = &["média", "media", "medium", "average"];

/// One selectable absorption/porosity class of a variable-yield product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceClassOption {
    label: String,
    value: f64,
    #[serde(default, rename = "default", skip_serializing_if = "is_false")]
    is_default: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl SurfaceClassOption {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            is_default: false,
        }
    }

    /// Mark this option as the explicit default selection.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Yield in m² per liter for this class.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    fn has_medium_label(&self) -> bool {
        let label = self.label.to_lowercase();
        MEDIUM_LABEL_MARKERS.iter().any(|m| label.contains(m))
    }
}

/// How a product's per-coat yield is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YieldKind {
    /// Yield is the midpoint of a declared range; equal bounds give a fixed yield.
    FixedRange { min: f64, max: f64 },
    /// Yield depends on a user-chosen surface class. Order is display order.
    BySurfaceClass { options: Vec<SurfaceClassOption> },
}

impl YieldKind {
    /// Yield for `FixedRange` products; `None` when a surface class must be chosen.
    pub fn fixed_yield(&self) -> Option<f64> {
        match self {
            // Halving the spread stays finite where `min + max` would overflow.
            YieldKind::FixedRange { min, max } => Some(min + (max - min) / 2.0),
            YieldKind::BySurfaceClass { .. } => None,
        }
    }

    /// Surface classes in display order (empty for `FixedRange`).
    pub fn surface_classes(&self) -> &[SurfaceClassOption] {
        match self {
            YieldKind::FixedRange { .. } => &[],
            YieldKind::BySurfaceClass { options } => options,
        }
    }

    pub fn requires_surface_class(&self) -> bool {
        matches!(self, YieldKind::BySurfaceClass { .. })
    }

    /// The surface class preselected when the caller has not chosen one.
    ///
    /// Precedence: an option flagged `default`, then the first option whose label
    /// reads as medium/average absorption, then the first option.
    pub fn default_surface_class(&self) -> Option<&SurfaceClassOption> {
        let options = self.surface_classes();
        options
            .iter()
            .find(|o| o.is_default)
            .or_else(|| options.iter().find(|o| o.has_medium_label()))
            .or_else(|| options.first())
    }

    /// Finds the surface class offering exactly `value`.
    ///
    /// Values come verbatim from the catalog, so exact comparison is intended.
    pub fn surface_class_by_value(&self, value: f64) -> Option<&SurfaceClassOption> {
        self.surface_classes().iter().find(|o| o.value == value)
    }
}

/// Whether a product's yield figure is quoted per coat or per single application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldBasis {
    PerCoat,
    PerApplication,
}

impl core::fmt::Display for YieldBasis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            YieldBasis::PerCoat => f.write_str("per coat"),
            YieldBasis::PerApplication => f.write_str("per application"),
        }
    }
}

/// One formulation's technical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    id: ProductId,
    #[serde(rename = "yield")]
    yield_kind: YieldKind,
    coat_options: Vec<u32>,
    container_size_liters: f64,
}

impl ProductEntry {
    pub fn new(
        id: impl Into<ProductId>,
        yield_kind: YieldKind,
        coat_options: Vec<u32>,
        container_size_liters: f64,
    ) -> Self {
        Self {
            id: id.into(),
            yield_kind,
            coat_options,
            container_size_liters,
        }
    }

    pub fn fixed_range(
        id: impl Into<ProductId>,
        min: f64,
        max: f64,
        coat_options: Vec<u32>,
        container_size_liters: f64,
    ) -> Self {
        Self::new(
            id,
            YieldKind::FixedRange { min, max },
            coat_options,
            container_size_liters,
        )
    }

    pub fn by_surface_class(
        id: impl Into<ProductId>,
        options: Vec<SurfaceClassOption>,
        coat_options: Vec<u32>,
        container_size_liters: f64,
    ) -> Self {
        Self::new(
            id,
            YieldKind::BySurfaceClass { options },
            coat_options,
            container_size_liters,
        )
    }

    pub fn yield_kind(&self) -> &YieldKind {
        &self.yield_kind
    }

    /// Allowed coat counts; the first one is the default.
    pub fn coat_options(&self) -> &[u32] {
        &self.coat_options
    }

    pub fn default_coat_count(&self) -> u32 {
        // Non-empty once the entry has passed `check_integrity`.
        self.coat_options.first().copied().unwrap_or(1)
    }

    pub fn allows_coat_count(&self, coats: u32) -> bool {
        self.coat_options.contains(&coats)
    }

    pub fn container_size_liters(&self) -> f64 {
        self.container_size_liters
    }

    /// Single-application products (only ever one coat) quote yield per application.
    pub fn yield_basis(&self) -> YieldBasis {
        if self.coat_options == [1] {
            YieldBasis::PerApplication
        } else {
            YieldBasis::PerCoat
        }
    }

    /// Checks every structural invariant of a catalog entry.
    pub fn check_integrity(&self) -> CatalogResult<()> {
        let product_id = || self.id.clone();

        if self.id.is_blank() {
            return Err(CatalogError::BlankProductId);
        }

        if self.coat_options.is_empty() {
            return Err(CatalogError::NoCoatOptions {
                product_id: product_id(),
            });
        }
        for (i, &coats) in self.coat_options.iter().enumerate() {
            if coats == 0 {
                return Err(CatalogError::ZeroCoatOption {
                    product_id: product_id(),
                });
            }
            if self.coat_options[..i].contains(&coats) {
                return Err(CatalogError::DuplicateCoatOption {
                    product_id: product_id(),
                    coats,
                });
            }
        }

        if !is_positive(self.container_size_liters) {
            return Err(CatalogError::NonPositiveContainer {
                product_id: product_id(),
                value: self.container_size_liters,
            });
        }

        match &self.yield_kind {
            YieldKind::FixedRange { min, max } => {
                for value in [*min, *max] {
                    if !is_positive(value) {
                        return Err(CatalogError::NonPositiveYield {
                            product_id: product_id(),
                            value,
                        });
                    }
                }
                if min > max {
                    return Err(CatalogError::InvertedYieldRange {
                        product_id: product_id(),
                        min: *min,
                        max: *max,
                    });
                }
            }
            YieldKind::BySurfaceClass { options } => {
                if options.is_empty() {
                    return Err(CatalogError::NoSurfaceClasses {
                        product_id: product_id(),
                    });
                }
                for (i, option) in options.iter().enumerate() {
                    if !is_positive(option.value) {
                        return Err(CatalogError::NonPositiveYield {
                            product_id: product_id(),
                            value: option.value,
                        });
                    }
                    if options[..i].iter().any(|o| o.label == option.label) {
                        return Err(CatalogError::DuplicateSurfaceClass {
                            product_id: product_id(),
                            label: option.label.clone(),
                        });
                    }
                    if options[..i].iter().any(|o| o.value == option.value) {
                        return Err(CatalogError::DuplicateSurfaceClassValue {
                            product_id: product_id(),
                            value: option.value,
                        });
                    }
                }
                if options.iter().filter(|o| o.is_default).count() > 1 {
                    return Err(CatalogError::MultipleDefaultSurfaceClasses {
                        product_id: product_id(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Entity for ProductEntry {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
