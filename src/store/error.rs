//! Catalog store error types

use thiserror::Error;

use crate::store::types::FoodId;

/// Errors that can occur in the catalog store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The database file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Requested food does not exist
    #[error("Food not found: {0}")]
    NotFound(FoodId),

    /// A record failed validation
    #[error("Invalid food: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
