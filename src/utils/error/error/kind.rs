//! Stable error kinds for outer protocol layers

use super::types::TrackerError;
use serde::{Deserialize, Serialize};

/// Protocol-independent classification of a [`TrackerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    DuplicateKey,
    Closed,
    BackendUnavailable,
    InvariantViolation,
    Config,
    Database,
}

impl ErrorKind {
    /// Upper-case code, suitable for an RPC or HTTP error body
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DuplicateKey => "DUPLICATE_KEY",
            ErrorKind::Closed => "CLOSED",
            ErrorKind::BackendUnavailable => "BACKEND_UNAVAILABLE",
            ErrorKind::InvariantViolation => "INVARIANT_VIOLATION",
            ErrorKind::Config => "CONFIG_ERROR",
            ErrorKind::Database => "DATABASE_ERROR",
        }
    }
}

/// Serializable error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::NotFound(_) => ErrorKind::NotFound,
            TrackerError::DuplicateKey(_) => ErrorKind::DuplicateKey,
            TrackerError::Closed => ErrorKind::Closed,
            TrackerError::BackendUnavailable(_) => ErrorKind::BackendUnavailable,
            TrackerError::InvariantViolation(_) => ErrorKind::InvariantViolation,
            TrackerError::Config(_) => ErrorKind::Config,
            TrackerError::Database(_) => ErrorKind::Database,
        }
    }

    pub fn to_detail(&self) -> ErrorDetail {
        ErrorDetail {
            kind: self.kind(),
            message: self.to_string(),
            retryable: self.is_retryable(),
        }
    }
}
