use crate::core::models::{FileRecord, LogType, ProcessStatus};
use crate::utils::error::{Result, TrackerError};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, tracker_file, tracker_file_log};
use super::batch_ops::{find_batch, owned_batch};
use super::log_ops::insert_file_log;
use super::types::SeaOrmDatabase;

/// Look up a file row by ID
pub(super) async fn find_file<C: ConnectionTrait>(
    conn: &C,
    file_id: &str,
) -> Result<tracker_file::Model> {
    entities::File::find()
        .filter(tracker_file::Column::FileId.eq(file_id))
        .one(conn)
        .await
        .map_err(TrackerError::from_db)?
        .ok_or_else(|| TrackerError::file_not_found(file_id))
}

impl SeaOrmDatabase {
    /// Register a pending file under an existing batch
    pub(super) async fn insert_file(
        &self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord> {
        debug!("Adding file {} to batch {}", file_id, batch_id);

        let record = FileRecord::new(batch_id, file_id, file_name, file_path);
        let (_writer, txn) = self.begin_write().await?;

        // The foreign key catches a batch deleted after this check
        find_batch(&txn, batch_id).await?;

        let model = tracker_file::ActiveModel {
            seq: NotSet,
            file_id: Set(record.file_id.clone()),
            batch_id: Set(record.batch_id.clone()),
            file_name: Set(record.file_name.clone()),
            file_path: Set(record.file_path.clone()),
            status: Set(record.status.as_str().to_string()),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
        .insert(&txn)
        .await
        .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        model.to_domain()
    }

    /// Update file status, appending a log entry
    pub(super) async fn update_file_status(
        &self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord> {
        debug!("Updating file status: {} -> {}", file_id, status);

        let now: DateTimeWithTimeZone = Utc::now().into();
        let (_writer, txn) = self.begin_write().await?;

        let result = entities::File::update_many()
            .col_expr(tracker_file::Column::Status, Expr::value(status.as_str()))
            .col_expr(tracker_file::Column::UpdatedAt, Expr::value(now))
            .filter(tracker_file::Column::FileId.eq(file_id))
            .exec(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        if result.rows_affected == 0 {
            return Err(TrackerError::file_not_found(file_id));
        }

        insert_file_log(&txn, file_id, status, description, log_type, now).await?;

        let file = find_file(&txn, file_id).await?.to_domain()?;
        txn.commit().await.map_err(TrackerError::from_db)?;
        Ok(file)
    }

    /// Fetch a file by ID
    pub(super) async fn load_file(&self, file_id: &str) -> Result<FileRecord> {
        find_file(&self.db, file_id).await?.to_domain()
    }

    /// List the files of a tenant's batch in insertion order
    pub(super) async fn list_batch_files(
        &self,
        user_id: &str,
        batch_id: &str,
    ) -> Result<Vec<FileRecord>> {
        let txn = self.begin_read().await?;
        owned_batch(&txn, user_id, batch_id).await?;

        let files = entities::File::find()
            .filter(tracker_file::Column::BatchId.eq(batch_id))
            .order_by_asc(tracker_file::Column::Seq)
            .all(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        files.into_iter().map(tracker_file::Model::to_domain).collect()
    }

    /// Remove a file and its logs along the ownership chain
    pub(super) async fn remove_file(&self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()> {
        debug!("Deleting file {} from batch {}", file_id, batch_id);

        let (_writer, txn) = self.begin_write().await?;
        owned_batch(&txn, user_id, batch_id).await?;

        let file = find_file(&txn, file_id).await?;
        if file.batch_id != batch_id {
            return Err(TrackerError::file_not_found(file_id));
        }

        entities::FileLog::delete_many()
            .filter(tracker_file_log::Column::FileId.eq(file_id))
            .exec(&txn)
            .await
            .map_err(TrackerError::from_db)?;
        entities::File::delete_many()
            .filter(tracker_file::Column::FileId.eq(file_id))
            .exec(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)
    }
}
