//! Category descriptors carried by search results.

use serde::{Deserialize, Serialize};

use pricewatch_core::ValueObject;

/// A product category as reported by the external search provider.
///
/// `external_id` is the provider's key; records themselves only carry the
/// category *name* (free-form label, no enumerated constraint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub external_id: String,
    pub name: String,
}

impl Category {
    pub fn new(external_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
        }
    }
}

impl ValueObject for Category {}
