//! Persistence boundary: repository traits and in-memory implementations.
//!
//! This crate is the explicit mapping layer between the domain records and
//! whatever actually stores them. Records cross this boundary keyed by their
//! id; storage schema is the implementation's concern. The in-memory
//! implementations are intended for tests/dev.

pub mod error;
pub mod in_memory;
pub mod repository;

pub use error::StoreError;
pub use in_memory::{
    InMemoryCategoryRepository, InMemoryProductRepository, InMemorySubscriptionRepository,
};
pub use repository::{CategoryRepository, ProductRepository, SubscriptionRepository};
