//! Immutable, validated product table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use paintcalc_core::{
    CatalogError, CatalogResult, Entity, ProductId, ValidationError, ValidationResult, index_by_id,
};

use crate::builtin::builtin_entries;
use crate::product::ProductEntry;

/// Serialized form of a catalog (array order is display order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<ProductEntry>,
}

/// Read-only product catalog.
///
/// Construction validates every entry; a `Catalog` value therefore always
/// satisfies the catalog invariants (non-empty coat options, positive yields,
/// non-empty surface classes, unique ids). There are no mutating operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ProductEntry>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from entries, failing on the first integrity violation.
    pub fn new(entries: Vec<ProductEntry>) -> CatalogResult<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for entry in &entries {
            entry.check_integrity()?;
        }
        let index = index_by_id(&entries).map_err(CatalogError::DuplicateProduct)?;

        Ok(Self { entries, index })
    }

    /// The built-in product line.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in table violates a catalog invariant, which is a
    /// programming error and must surface at startup.
    pub fn builtin() -> Self {
        Self::new(builtin_entries()).expect("built-in catalog violates catalog invariants")
    }

    /// Decode and validate a JSON catalog document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::try_from(document)
    }

    /// Look up a product by id.
    pub fn lookup(&self, product_id: &str) -> ValidationResult<&ProductEntry> {
        self.index
            .get(product_id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| ValidationError::ProductNotFound(ProductId::new(product_id)))
    }

    /// Product ids in catalog order.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.entries.iter().map(|entry| entry.id())
    }

    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            products: self.entries.clone(),
        }
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(document.products)
    }
}
