//! Store backend enum with dispatch methods

use crate::config::{StorageConfig, StoreBackendKind};
use crate::core::models::{
    BatchRecord, FileRecord, LogType, ProcessStatus, StatusLogEntry, StoreStats,
};
use crate::core::traits::TrackerStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::info;

use super::database::Database;
use super::memory::MemoryStore;

/// Store backend enum
#[derive(Debug)]
pub enum StoreBackend {
    /// In-process maps
    Memory(MemoryStore),
    /// SQLite or PostgreSQL through SeaORM
    Database(Database),
}

impl StoreBackend {
    /// Create a backend for the given configuration, running migrations
    /// first when `auto_migrate` is set
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing tracker store: {}", config.backend);

        match config.backend {
            StoreBackendKind::Memory => Ok(StoreBackend::Memory(MemoryStore::new())),
            StoreBackendKind::Database => {
                let db = Database::new(&config.database).await?;
                if config.auto_migrate {
                    db.migrate().await?;
                }
                Ok(StoreBackend::Database(db))
            }
        }
    }

    /// Borrow the backend as a trait object
    pub fn as_store(&self) -> &dyn TrackerStore {
        match self {
            StoreBackend::Memory(store) => store,
            StoreBackend::Database(store) => store,
        }
    }
}

#[async_trait]
impl TrackerStore for StoreBackend {
    async fn create_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        self.as_store().create_batch(user_id, batch_id).await
    }

    async fn add_file(
        &self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord> {
        self.as_store()
            .add_file(batch_id, file_id, file_name, file_path)
            .await
    }

    async fn log_file_status(
        &self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord> {
        self.as_store()
            .log_file_status(file_id, status, description, log_type)
            .await
    }

    async fn log_batch_status(
        &self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord> {
        self.as_store()
            .log_batch_status(batch_id, status, file_count)
            .await
    }

    async fn get_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        self.as_store().get_batch(user_id, batch_id).await
    }

    async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
        self.as_store().get_file(file_id).await
    }

    async fn get_user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>> {
        self.as_store().get_user_batches(user_id).await
    }

    async fn get_batch_files(&self, user_id: &str, batch_id: &str) -> Result<Vec<FileRecord>> {
        self.as_store().get_batch_files(user_id, batch_id).await
    }

    async fn get_file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.as_store().get_file_logs(file_id).await
    }

    async fn get_batch_logs(&self, user_id: &str, batch_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.as_store().get_batch_logs(user_id, batch_id).await
    }

    async fn delete_file_logs(&self, file_id: &str) -> Result<u64> {
        self.as_store().delete_file_logs(file_id).await
    }

    async fn delete_file(&self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()> {
        self.as_store().delete_file(user_id, batch_id, file_id).await
    }

    async fn delete_batch(&self, user_id: &str, batch_id: &str) -> Result<()> {
        self.as_store().delete_batch(user_id, batch_id).await
    }

    async fn delete_all(&self, user_id: &str) -> Result<u64> {
        self.as_store().delete_all(user_id).await
    }

    async fn health_check(&self) -> Result<()> {
        self.as_store().health_check().await
    }

    async fn stats(&self) -> Result<StoreStats> {
        self.as_store().stats().await
    }

    async fn close(&self) -> Result<()> {
        self.as_store().close().await
    }

    fn backend_name(&self) -> &'static str {
        self.as_store().backend_name()
    }
}
