//! Helper functions for creating specific error types

use super::types::TrackerError;

/// Helper functions for creating specific errors
impl TrackerError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn duplicate_key<S: Into<String>>(message: S) -> Self {
        Self::DuplicateKey(message.into())
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::BackendUnavailable(message.into())
    }

    pub fn invariant<S: Into<String>>(message: S) -> Self {
        Self::InvariantViolation(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn batch_not_found(batch_id: &str) -> Self {
        Self::NotFound(format!("Batch not found: {}", batch_id))
    }

    pub fn file_not_found(file_id: &str) -> Self {
        Self::NotFound(format!("File not found: {}", file_id))
    }

    /// Only transient backend failures are worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
