//! Error types for the tracker

use thiserror::Error;

/// Result type alias for the tracker
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for every store operation
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Referenced entity is absent or not owned by the calling tenant
    #[error("Not found: {0}")]
    NotFound(String),

    /// Identifier collision on creation
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Operation attempted after or concurrently with `close()`
    #[error("Store is closed")]
    Closed,

    /// Transient I/O failure, the caller may retry
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend found state it cannot reconcile
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors that have no mapping in the store taxonomy
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
