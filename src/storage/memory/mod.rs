//! In-memory tracker store
//!
//! Reference backend for conformance testing and single-process deployments.
//! All state sits behind one lock; each operation performs its lookup,
//! ownership check and mutation inside a single critical section that never
//! awaits, so concurrent operations are linearizable and a cancelled caller
//! can never leave a partial write behind.

mod state;

use crate::core::models::{
    BatchRecord, FileRecord, LogType, ProcessStatus, StatusLogEntry, StoreStats,
};
use crate::core::traits::TrackerStore;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use parking_lot::RwLock;
use state::TrackerState;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// In-memory [`TrackerStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<TrackerState>,
    closed: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(TrackerError::Closed);
        }
        Ok(())
    }

    /// Run a read under the shared lock. The closed flag is checked again
    /// once the lock is held so a concurrent `close()` wins cleanly.
    fn read<T>(&self, f: impl FnOnce(&TrackerState) -> Result<T>) -> Result<T> {
        self.ensure_open()?;
        let state = self.state.read();
        self.ensure_open()?;
        f(&state)
    }

    fn write<T>(&self, f: impl FnOnce(&mut TrackerState) -> Result<T>) -> Result<T> {
        self.ensure_open()?;
        let mut state = self.state.write();
        self.ensure_open()?;
        f(&mut state)
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn create_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        debug!(user_id, batch_id, "Creating batch");
        self.write(|state| state.create_batch(user_id, batch_id))
    }

    async fn add_file(
        &self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord> {
        debug!(batch_id, file_id, "Adding file");
        self.write(|state| state.add_file(batch_id, file_id, file_name, file_path))
    }

    async fn log_file_status(
        &self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord> {
        debug!(file_id, %status, %log_type, "Logging file status");
        self.write(|state| state.log_file_status(file_id, status, description, log_type))
    }

    async fn log_batch_status(
        &self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord> {
        debug!(batch_id, %status, file_count, "Logging batch status");
        self.write(|state| state.log_batch_status(batch_id, status, file_count))
    }

    async fn get_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        self.read(|state| state.owned_batch(user_id, batch_id).cloned())
    }

    async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
        self.read(|state| state.file(file_id).cloned())
    }

    async fn get_user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>> {
        self.read(|state| state.user_batches(user_id))
    }

    async fn get_batch_files(&self, user_id: &str, batch_id: &str) -> Result<Vec<FileRecord>> {
        self.read(|state| state.batch_files(user_id, batch_id))
    }

    async fn get_file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.read(|state| state.file_logs(file_id))
    }

    async fn get_batch_logs(&self, user_id: &str, batch_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.read(|state| state.batch_logs(user_id, batch_id))
    }

    async fn delete_file_logs(&self, file_id: &str) -> Result<u64> {
        debug!(file_id, "Purging file logs");
        self.write(|state| state.delete_file_logs(file_id))
    }

    async fn delete_file(&self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()> {
        debug!(user_id, batch_id, file_id, "Deleting file");
        self.write(|state| state.delete_file(user_id, batch_id, file_id))
    }

    async fn delete_batch(&self, user_id: &str, batch_id: &str) -> Result<()> {
        info!(user_id, batch_id, "Deleting batch");
        self.write(|state| state.delete_batch(user_id, batch_id))
    }

    async fn delete_all(&self, user_id: &str) -> Result<u64> {
        let removed = self.write(|state| state.delete_all(user_id))?;
        info!(user_id, removed, "Deleted all tenant batches");
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        self.ensure_open()
    }

    async fn stats(&self) -> Result<StoreStats> {
        self.read(|state| Ok(state.stats()))
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            debug!("Memory store already closed");
            return Ok(());
        }
        self.state.write().clear();
        info!("Memory store closed");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
