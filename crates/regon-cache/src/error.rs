//! Error types for cache stores.

use thiserror::Error;

/// Errors that can occur in cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backing storage could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored entry could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot serve requests right now
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
