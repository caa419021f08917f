use thiserror::Error;

/// Store operation error.
///
/// Infrastructure failures (storage faults, uniqueness conflicts) as opposed
/// to domain errors. A plain miss is not an error at this layer — lookups
/// return `Option`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (e.g. duplicate subscription link).
    #[error("store conflict: {0}")]
    Conflict(String),

    /// The underlying storage failed (e.g. poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
