use thiserror::Error;

use pricewatch_core::DomainError;
use pricewatch_store::StoreError;

/// Service-layer error: domain failures or store failures, unchanged.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TrackingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackingError::Domain(DomainError::NotFound))
    }
}
