use crate::core::models::StoreStats;
use crate::utils::error::{Result, TrackerError};
use sea_orm::sea_query::Query;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, tracker_batch, tracker_batch_log, tracker_file, tracker_file_log};
use super::batch_ops::owned_batch;
use super::types::SeaOrmDatabase;

/// Delete the given batches with their files and every related log entry
async fn cascade_batches<C: ConnectionTrait>(conn: &C, batch_ids: &[String]) -> Result<()> {
    let files_of_batches = Query::select()
        .column(tracker_file::Column::FileId)
        .from(entities::File)
        .and_where(tracker_file::Column::BatchId.is_in(batch_ids.iter().cloned()))
        .to_owned();

    entities::FileLog::delete_many()
        .filter(tracker_file_log::Column::FileId.in_subquery(files_of_batches))
        .exec(conn)
        .await
        .map_err(TrackerError::from_db)?;
    entities::File::delete_many()
        .filter(tracker_file::Column::BatchId.is_in(batch_ids.iter().cloned()))
        .exec(conn)
        .await
        .map_err(TrackerError::from_db)?;
    entities::BatchLog::delete_many()
        .filter(tracker_batch_log::Column::BatchId.is_in(batch_ids.iter().cloned()))
        .exec(conn)
        .await
        .map_err(TrackerError::from_db)?;

    let removed = entities::Batch::delete_many()
        .filter(tracker_batch::Column::BatchId.is_in(batch_ids.iter().cloned()))
        .exec(conn)
        .await
        .map_err(TrackerError::from_db)?;

    if removed.rows_affected != batch_ids.len() as u64 {
        return Err(TrackerError::invariant(format!(
            "Expected to remove {} batches, removed {}",
            batch_ids.len(),
            removed.rows_affected
        )));
    }
    Ok(())
}

impl SeaOrmDatabase {
    /// Remove a tenant's batch with everything under it
    pub(super) async fn remove_batch(&self, user_id: &str, batch_id: &str) -> Result<()> {
        debug!("Deleting batch: {}", batch_id);

        let (_writer, txn) = self.begin_write().await?;
        owned_batch(&txn, user_id, batch_id).await?;
        cascade_batches(&txn, &[batch_id.to_string()]).await?;
        txn.commit().await.map_err(TrackerError::from_db)
    }

    /// Remove every batch a tenant owns, returning how many were removed
    pub(super) async fn remove_user_data(&self, user_id: &str) -> Result<u64> {
        debug!("Deleting all batches for user: {}", user_id);

        let (_writer, txn) = self.begin_write().await?;
        let batch_ids: Vec<String> = entities::Batch::find()
            .select_only()
            .column(tracker_batch::Column::BatchId)
            .filter(tracker_batch::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        if batch_ids.is_empty() {
            return Ok(0);
        }

        cascade_batches(&txn, &batch_ids).await?;
        txn.commit().await.map_err(TrackerError::from_db)?;
        Ok(batch_ids.len() as u64)
    }

    /// Row counts across all tenants
    pub(super) async fn count_rows(&self) -> Result<StoreStats> {
        let txn = self.begin_read().await?;

        let batches = entities::Batch::find()
            .count(&txn)
            .await
            .map_err(TrackerError::from_db)?;
        let files = entities::File::find()
            .count(&txn)
            .await
            .map_err(TrackerError::from_db)?;
        let file_logs = entities::FileLog::find()
            .count(&txn)
            .await
            .map_err(TrackerError::from_db)?;
        let batch_logs = entities::BatchLog::find()
            .count(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        txn.commit().await.map_err(TrackerError::from_db)?;
        Ok(StoreStats {
            batches,
            files,
            logs: file_logs + batch_logs,
        })
    }
}
