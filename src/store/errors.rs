//! Store error types
//!
//! Error codes:
//! - ROSTER_STORE_IO (underlying read/write failure)
//! - ROSTER_STORE_UNAVAILABLE (store rejects all access)

use thiserror::Error;

/// Result type for key-value store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("Store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The store cannot accept any access
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns the stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io(_) => "ROSTER_STORE_IO",
            StoreError::Unavailable(_) => "ROSTER_STORE_UNAVAILABLE",
        }
    }
}
