//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Identifier of a product formulation (the catalog key).
///
/// Product ids are human-readable names ("Moshe 3000 Flex"), not generated keys,
/// so the newtype wraps a `String` and compares byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ProductId, _>` be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
