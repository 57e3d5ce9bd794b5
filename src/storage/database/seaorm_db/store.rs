use crate::core::models::{
    BatchRecord, FileRecord, LogType, ProcessStatus, StatusLogEntry, StoreStats,
};
use crate::core::traits::TrackerStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::info;

use super::types::SeaOrmDatabase;

#[async_trait]
impl TrackerStore for SeaOrmDatabase {
    async fn create_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        self.ensure_open()?;
        self.insert_batch(user_id, batch_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn add_file(
        &self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord> {
        self.ensure_open()?;
        self.insert_file(batch_id, file_id, file_name, file_path)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn log_file_status(
        &self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord> {
        self.ensure_open()?;
        self.update_file_status(file_id, status, description, log_type)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn log_batch_status(
        &self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord> {
        self.ensure_open()?;
        self.update_batch_status(batch_id, status, file_count)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn get_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        self.ensure_open()?;
        self.load_batch(user_id, batch_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
        self.ensure_open()?;
        self.load_file(file_id).await.map_err(|e| self.guard(e))
    }

    async fn get_user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>> {
        self.ensure_open()?;
        self.list_user_batches(user_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn get_batch_files(&self, user_id: &str, batch_id: &str) -> Result<Vec<FileRecord>> {
        self.ensure_open()?;
        self.list_batch_files(user_id, batch_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn get_file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.ensure_open()?;
        self.list_file_logs(file_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn get_batch_logs(&self, user_id: &str, batch_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.ensure_open()?;
        self.list_batch_logs(user_id, batch_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn delete_file_logs(&self, file_id: &str) -> Result<u64> {
        self.ensure_open()?;
        self.purge_file_logs(file_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn delete_file(&self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()> {
        self.ensure_open()?;
        self.remove_file(user_id, batch_id, file_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn delete_batch(&self, user_id: &str, batch_id: &str) -> Result<()> {
        self.ensure_open()?;
        info!(user_id, batch_id, "Deleting batch");
        self.remove_batch(user_id, batch_id)
            .await
            .map_err(|e| self.guard(e))
    }

    async fn delete_all(&self, user_id: &str) -> Result<u64> {
        self.ensure_open()?;
        let removed = self
            .remove_user_data(user_id)
            .await
            .map_err(|e| self.guard(e))?;
        info!(user_id, removed, "Deleted all tenant batches");
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        self.ensure_open()?;
        self.ping().await
    }

    async fn stats(&self) -> Result<StoreStats> {
        self.ensure_open()?;
        self.count_rows().await.map_err(|e| self.guard(e))
    }

    async fn close(&self) -> Result<()> {
        self.close_pool().await
    }

    fn backend_name(&self) -> &'static str {
        self.backend_type.as_str()
    }
}
