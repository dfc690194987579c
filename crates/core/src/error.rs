//! Domain error model.
//!
//! Two families, split by who is at fault:
//! - [`CatalogError`]: the static catalog data is malformed. Raised once while the
//!   catalog is built and treated as fatal at startup.
//! - [`ValidationError`]: a caller supplied bad input for one request. Always
//!   recoverable; the caller decides how to present it.

use thiserror::Error;

use crate::id::ProductId;

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type used by validation and the coverage calculator.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Catalog integrity violation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog declares no products at all.
    #[error("catalog contains no products")]
    Empty,

    /// A product id is empty or whitespace only.
    #[error("product id cannot be blank")]
    BlankProductId,

    /// Two entries share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// `coat_options` is empty.
    #[error("{product_id}: coat options cannot be empty")]
    NoCoatOptions { product_id: ProductId },

    /// A coat option is zero.
    #[error("{product_id}: coat options must be positive")]
    ZeroCoatOption { product_id: ProductId },

    /// The same coat count is listed twice.
    #[error("{product_id}: coat option {coats} is listed more than once")]
    DuplicateCoatOption { product_id: ProductId, coats: u32 },

    /// A surface-class product declares no classes.
    #[error("{product_id}: surface class options cannot be empty")]
    NoSurfaceClasses { product_id: ProductId },

    /// Two surface classes share a label.
    #[error("{product_id}: surface class '{label}' is listed more than once")]
    DuplicateSurfaceClass { product_id: ProductId, label: String },

    /// Two surface classes share a yield value, so selecting by value is ambiguous.
    #[error("{product_id}: surface class yield {value} is listed more than once")]
    DuplicateSurfaceClassValue { product_id: ProductId, value: f64 },

    /// More than one surface class is flagged as the default.
    #[error("{product_id}: more than one surface class is marked as default")]
    MultipleDefaultSurfaceClasses { product_id: ProductId },

    /// A yield value is zero, negative, or not finite.
    #[error("{product_id}: yield must be a positive number, got {value}")]
    NonPositiveYield { product_id: ProductId, value: f64 },

    /// `FixedRange` bounds are inverted.
    #[error("{product_id}: yield range is inverted (min {min} > max {max})")]
    InvertedYieldRange {
        product_id: ProductId,
        min: f64,
        max: f64,
    },

    /// Container size is zero, negative, or not finite.
    #[error("{product_id}: container size must be a positive number, got {value}")]
    NonPositiveContainer { product_id: ProductId, value: f64 },

    /// Catalog document could not be decoded.
    #[error("catalog document is malformed: {0}")]
    Malformed(String),
}

/// Per-request validation failure.
///
/// The variant set is fixed; every variant maps to a stable [`code`](Self::code)
/// so outer layers can translate it into a user-facing message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown product id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Area missing, non-numeric, or not strictly positive.
    #[error("invalid area: {reason}")]
    InvalidArea { reason: String },

    /// Coat count is not one of the product's allowed values.
    #[error("{product_id} cannot be applied in {requested} coat(s); allowed: {allowed:?}")]
    InvalidCoatCount {
        product_id: ProductId,
        requested: u32,
        allowed: Vec<u32>,
    },

    /// The product needs a surface class and none was supplied.
    #[error("{0} requires a surface absorption class")]
    MissingSurfaceClass(ProductId),

    /// The supplied yield value is not one of the product's surface classes.
    #[error("{product_id} offers no surface class with yield {value}")]
    InvalidSurfaceClass { product_id: ProductId, value: f64 },
}

impl ValidationError {
    pub fn invalid_area(reason: impl Into<String>) -> Self {
        Self::InvalidArea {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ProductNotFound(_) => "product_not_found",
            ValidationError::InvalidArea { .. } => "invalid_area",
            ValidationError::InvalidCoatCount { .. } => "invalid_coat_count",
            ValidationError::MissingSurfaceClass(_) => "missing_surface_class",
            ValidationError::InvalidSurfaceClass { .. } => "invalid_surface_class",
        }
    }
}
