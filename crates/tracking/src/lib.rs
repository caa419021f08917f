//! Tracking service layer: the operations a client performs against the
//! repositories (subscriptions, lookups, search-and-register, ingestion).

pub mod error;
pub mod searcher;
pub mod service;

pub use error::TrackingError;
pub use searcher::{FixtureSearcher, ProductQuery, SearchHit, Searcher};
pub use service::TrackingService;
