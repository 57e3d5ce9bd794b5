use crate::core::models::BatchRecord;
use crate::utils::error::TrackerError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tracker_batches")]
pub struct Model {
    /// Insertion sequence, defines creation order
    #[sea_orm(primary_key)]
    pub seq: i64,

    /// Batch ID, unique across tenants
    #[sea_orm(unique)]
    pub batch_id: String,

    /// Owning tenant
    pub user_id: String,

    /// Process status (lower-case text form)
    pub status: String,

    /// Caller-supplied file count
    pub file_count: i64,

    /// Batch creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last status update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Batch entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Files registered under the batch
    #[sea_orm(has_many = "super::tracker_file::Entity")]
    File,
    /// Status log of the batch
    #[sea_orm(has_many = "super::tracker_batch_log::Entity")]
    BatchLog,
}

impl Related<super::tracker_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::File.def()
    }
}

impl Related<super::tracker_batch_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record
    pub fn to_domain(self) -> crate::utils::error::Result<BatchRecord> {
        let status = self.status.parse().map_err(|e: String| {
            TrackerError::invariant(format!("Batch {}: {}", self.batch_id, e))
        })?;
        let file_count = u32::try_from(self.file_count).map_err(|_| {
            TrackerError::invariant(format!(
                "Batch {} has out-of-range file count {}",
                self.batch_id, self.file_count
            ))
        })?;

        Ok(BatchRecord {
            batch_id: self.batch_id,
            user_id: self.user_id,
            status,
            file_count,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
