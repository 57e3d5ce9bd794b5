use crate::core::models::{LogType, ProcessStatus, StatusLogEntry};
use crate::utils::error::{Result, TrackerError};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, tracker_batch_log, tracker_file_log};
use super::batch_ops::owned_batch;
use super::file_ops::find_file;
use super::types::SeaOrmDatabase;

pub(super) async fn insert_file_log<C: ConnectionTrait>(
    conn: &C,
    file_id: &str,
    status: ProcessStatus,
    description: &str,
    log_type: LogType,
    at: DateTimeWithTimeZone,
) -> Result<()> {
    tracker_file_log::ActiveModel {
        log_id: NotSet,
        file_id: Set(file_id.to_string()),
        status: Set(status.as_str().to_string()),
        description: Set(description.to_string()),
        log_type: Set(log_type.as_str().to_string()),
        created_at: Set(at),
    }
    .insert(conn)
    .await
    .map_err(TrackerError::from_db)?;
    Ok(())
}

pub(super) async fn insert_batch_log<C: ConnectionTrait>(
    conn: &C,
    batch_id: &str,
    status: ProcessStatus,
    description: &str,
    log_type: LogType,
    at: DateTimeWithTimeZone,
) -> Result<()> {
    tracker_batch_log::ActiveModel {
        log_id: NotSet,
        batch_id: Set(batch_id.to_string()),
        status: Set(status.as_str().to_string()),
        description: Set(description.to_string()),
        log_type: Set(log_type.as_str().to_string()),
        created_at: Set(at),
    }
    .insert(conn)
    .await
    .map_err(TrackerError::from_db)?;
    Ok(())
}

impl SeaOrmDatabase {
    /// Status log of a file, oldest first
    pub(super) async fn list_file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>> {
        let txn = self.begin_read().await?;
        find_file(&txn, file_id).await?;

        let logs = entities::FileLog::find()
            .filter(tracker_file_log::Column::FileId.eq(file_id))
            .order_by_asc(tracker_file_log::Column::LogId)
            .all(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        logs.into_iter().map(tracker_file_log::Model::to_domain).collect()
    }

    /// Status log of a tenant's batch, oldest first
    pub(super) async fn list_batch_logs(
        &self,
        user_id: &str,
        batch_id: &str,
    ) -> Result<Vec<StatusLogEntry>> {
        let txn = self.begin_read().await?;
        owned_batch(&txn, user_id, batch_id).await?;

        let logs = entities::BatchLog::find()
            .filter(tracker_batch_log::Column::BatchId.eq(batch_id))
            .order_by_asc(tracker_batch_log::Column::LogId)
            .all(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        logs.into_iter().map(tracker_batch_log::Model::to_domain).collect()
    }

    /// Purge every log entry of a file
    pub(super) async fn purge_file_logs(&self, file_id: &str) -> Result<u64> {
        debug!("Purging logs of file: {}", file_id);

        let (_writer, txn) = self.begin_write().await?;
        find_file(&txn, file_id).await?;

        let result = entities::FileLog::delete_many()
            .filter(tracker_file_log::Column::FileId.eq(file_id))
            .exec(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        Ok(result.rows_affected)
    }
}
