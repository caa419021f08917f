//! Search boundary: the external product-search provider.
//!
//! The provider lives outside this system; we only model the call and its
//! results. The shipped implementation is fixture-backed — enough for the
//! service's search-and-register flow and for tests.

use pricewatch_catalog::{Category, PriceObservation};
use pricewatch_core::ProductId;

/// A free-text product search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub text: String,
}

impl ProductQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One result from the search provider.
///
/// The provider issues the product id; ids are externally assigned
/// throughout this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price_history: Vec<PriceObservation>,
}

/// External search provider boundary.
pub trait Searcher: Send + Sync {
    fn search(&self, query: &ProductQuery) -> Vec<SearchHit>;
}

/// Fixture-backed searcher: returns the configured hits whose names contain
/// the query text (case-insensitive).
#[derive(Debug, Default)]
pub struct FixtureSearcher {
    hits: Vec<SearchHit>,
}

impl FixtureSearcher {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }
}

impl Searcher for FixtureSearcher {
    fn search(&self, query: &ProductQuery) -> Vec<SearchHit> {
        let needle = query.text.to_lowercase();
        self.hits
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(raw_id: i64, name: &str) -> SearchHit {
        SearchHit {
            product_id: ProductId::new(raw_id).unwrap(),
            name: name.to_string(),
            description: String::new(),
            category: Category::new("ext-1", "Tools"),
            price_history: vec![],
        }
    }

    #[test]
    fn fixture_searcher_matches_case_insensitively() {
        let searcher = FixtureSearcher::new(vec![hit(1, "Cordless Drill"), hit(2, "Hammer")]);

        let found = searcher.search(&ProductQuery::new("drill"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Cordless Drill");

        assert!(searcher.search(&ProductQuery::new("saw")).is_empty());
    }
}
