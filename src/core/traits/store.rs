//! Tracker store trait definition
//!
//! The data-access contract every persistence backend implements.

use crate::core::models::{
    BatchRecord, FileRecord, LogType, ProcessStatus, StatusLogEntry, StoreStats,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Batch and file tracking over a persistence backend.
///
/// Every operation that names a batch or file checks existence (and, where a
/// `user_id` is given, ownership) in the same atomic step that performs the
/// read or write. Operations on a closed store fail with
/// [`TrackerError::Closed`](crate::utils::error::TrackerError::Closed).
///
/// Status transitions are not validated; any [`ProcessStatus`] may follow any
/// other.
#[async_trait]
pub trait TrackerStore: Send + Sync + std::fmt::Debug {
    /// Create a pending batch with no files.
    ///
    /// Fails with `DuplicateKey` if `batch_id` exists for any tenant.
    async fn create_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord>;

    /// Register a pending file under an existing batch.
    ///
    /// Fails with `NotFound` if the batch is absent and `DuplicateKey` if
    /// `file_id` is taken.
    async fn add_file(
        &self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord>;

    /// Set a file's status and append a log entry for it.
    async fn log_file_status(
        &self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord>;

    /// Set a batch's status and file count and append a log entry for it.
    ///
    /// `file_count` is stored as given.
    async fn log_batch_status(
        &self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord>;

    /// Fetch a batch owned by `user_id`.
    async fn get_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord>;

    /// Fetch a file by ID.
    async fn get_file(&self, file_id: &str) -> Result<FileRecord>;

    /// All batches of a tenant in creation order; empty when there are none.
    async fn get_user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>>;

    /// Files of a tenant's batch in insertion order.
    async fn get_batch_files(&self, user_id: &str, batch_id: &str) -> Result<Vec<FileRecord>>;

    /// Status log of a file, oldest first.
    async fn get_file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>>;

    /// Status log of a tenant's batch, oldest first.
    async fn get_batch_logs(&self, user_id: &str, batch_id: &str) -> Result<Vec<StatusLogEntry>>;

    /// Purge every log entry of a file, leaving the file itself untouched.
    /// Returns the number of entries removed.
    async fn delete_file_logs(&self, file_id: &str) -> Result<u64>;

    /// Remove a file and its logs. Every ID must match the ownership chain
    /// `user_id -> batch_id -> file_id`.
    async fn delete_file(&self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()>;

    /// Remove a batch together with its files and all their logs.
    async fn delete_batch(&self, user_id: &str, batch_id: &str) -> Result<()>;

    /// Remove everything a tenant owns. Returns the number of batches
    /// removed; a tenant with no data is a no-op.
    async fn delete_all(&self, user_id: &str) -> Result<u64>;

    /// Fail unless the backend can serve requests.
    async fn health_check(&self) -> Result<()>;

    /// Totals across all tenants.
    async fn stats(&self) -> Result<StoreStats>;

    /// Release backend resources. Idempotent.
    async fn close(&self) -> Result<()>;

    /// Short backend name, e.g. `"memory"` or `"sqlite"`.
    fn backend_name(&self) -> &'static str;
}
