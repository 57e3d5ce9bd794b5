use crate::core::models::{LogSubject, StatusLogEntry};
use crate::utils::error::TrackerError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch status log database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tracker_batch_logs")]
pub struct Model {
    /// Log sequence number
    #[sea_orm(primary_key)]
    pub log_id: i64,

    /// Batch the entry belongs to
    pub batch_id: String,

    /// Recorded status
    pub status: String,

    /// Free-text description
    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Log category
    pub log_type: String,

    /// Entry timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Batch log entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to batch relation
    #[sea_orm(
        belongs_to = "super::tracker_batch::Entity",
        from = "Column::BatchId",
        to = "super::tracker_batch::Column::BatchId",
        on_delete = "Cascade"
    )]
    Batch,
}

impl Related<super::tracker_batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain log entry
    pub fn to_domain(self) -> crate::utils::error::Result<StatusLogEntry> {
        let status = self.status.parse().map_err(|e: String| {
            TrackerError::invariant(format!("Batch log {}: {}", self.log_id, e))
        })?;
        let log_type = self.log_type.parse().map_err(|e: String| {
            TrackerError::invariant(format!("Batch log {}: {}", self.log_id, e))
        })?;

        Ok(StatusLogEntry {
            log_id: self.log_id,
            subject: LogSubject::Batch,
            subject_id: self.batch_id,
            status,
            description: self.description,
            log_type,
            timestamp: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}
