//! Catalog domain module (tracked products and their series).
//!
//! This crate contains the observed-product record and the values embedded in
//! it, implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage).

pub mod category;
pub mod observed_product;
pub mod price;
pub mod statistics;

pub use category::Category;
pub use observed_product::ObservedProduct;
pub use price::PriceObservation;
pub use statistics::{StatisticsEntry, StatsWindow};
