use crate::core::models::{BatchRecord, LogType, ProcessStatus, batch_status_description};
use crate::utils::error::{Result, TrackerError};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, tracker_batch};
use super::log_ops::insert_batch_log;
use super::types::SeaOrmDatabase;

/// Look up a batch row and verify it belongs to `user_id`
pub(super) async fn owned_batch<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    batch_id: &str,
) -> Result<tracker_batch::Model> {
    entities::Batch::find()
        .filter(tracker_batch::Column::BatchId.eq(batch_id))
        .filter(tracker_batch::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(TrackerError::from_db)?
        .ok_or_else(|| TrackerError::batch_not_found(batch_id))
}

/// Look up a batch row regardless of owner
pub(super) async fn find_batch<C: ConnectionTrait>(
    conn: &C,
    batch_id: &str,
) -> Result<tracker_batch::Model> {
    entities::Batch::find()
        .filter(tracker_batch::Column::BatchId.eq(batch_id))
        .one(conn)
        .await
        .map_err(TrackerError::from_db)?
        .ok_or_else(|| TrackerError::batch_not_found(batch_id))
}

impl SeaOrmDatabase {
    /// Insert a new pending batch
    pub(super) async fn insert_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        debug!("Creating batch: {}", batch_id);

        let record = BatchRecord::new(user_id, batch_id);
        let active_model = tracker_batch::ActiveModel {
            seq: NotSet,
            batch_id: Set(record.batch_id.clone()),
            user_id: Set(record.user_id.clone()),
            status: Set(record.status.as_str().to_string()),
            file_count: Set(i64::from(record.file_count)),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        };

        let (_writer, txn) = self.begin_write().await?;
        let model = active_model
            .insert(&txn)
            .await
            .map_err(TrackerError::from_db)?;
        txn.commit().await.map_err(TrackerError::from_db)?;
        model.to_domain()
    }

    /// Update batch status and file count, appending a log entry
    pub(super) async fn update_batch_status(
        &self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord> {
        debug!("Updating batch status: {} -> {}", batch_id, status);

        let now: DateTimeWithTimeZone = Utc::now().into();
        let (_writer, txn) = self.begin_write().await?;

        let result = entities::Batch::update_many()
            .col_expr(tracker_batch::Column::Status, Expr::value(status.as_str()))
            .col_expr(tracker_batch::Column::FileCount, Expr::value(i64::from(file_count)))
            .col_expr(tracker_batch::Column::UpdatedAt, Expr::value(now))
            .filter(tracker_batch::Column::BatchId.eq(batch_id))
            .exec(&txn)
            .await
            .map_err(TrackerError::from_db)?;

        if result.rows_affected == 0 {
            return Err(TrackerError::batch_not_found(batch_id));
        }

        let description = batch_status_description(status, file_count);
        insert_batch_log(&txn, batch_id, status, &description, LogType::Info, now).await?;

        let batch = find_batch(&txn, batch_id).await?.to_domain()?;
        txn.commit().await.map_err(TrackerError::from_db)?;
        Ok(batch)
    }

    /// Fetch a batch owned by `user_id`
    pub(super) async fn load_batch(&self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        owned_batch(&self.db, user_id, batch_id).await?.to_domain()
    }

    /// List a tenant's batches in creation order
    pub(super) async fn list_user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>> {
        debug!("Listing batches for user: {}", user_id);

        entities::Batch::find()
            .filter(tracker_batch::Column::UserId.eq(user_id))
            .order_by_asc(tracker_batch::Column::Seq)
            .all(&self.db)
            .await
            .map_err(TrackerError::from_db)?
            .into_iter()
            .map(tracker_batch::Model::to_domain)
            .collect()
    }
}
