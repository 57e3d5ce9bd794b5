use crate::core::models::{LogSubject, StatusLogEntry};
use crate::utils::error::TrackerError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// File status log database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tracker_file_logs")]
pub struct Model {
    /// Log sequence number
    #[sea_orm(primary_key)]
    pub log_id: i64,

    /// File the entry belongs to
    pub file_id: String,

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

/// File log entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to file relation
    #[sea_orm(
        belongs_to = "super::tracker_file::Entity",
        from = "Column::FileId",
        to = "super::tracker_file::Column::FileId",
        on_delete = "Cascade"
    )]
    File,
}

impl Related<super::tracker_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::File.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain log entry
    pub fn to_domain(self) -> crate::utils::error::Result<StatusLogEntry> {
        let status = self.status.parse().map_err(|e: String| {
            TrackerError::invariant(format!("File log {}: {}", self.log_id, e))
        })?;
        let log_type = self.log_type.parse().map_err(|e: String| {
            TrackerError::invariant(format!("File log {}: {}", self.log_id, e))
        })?;

        Ok(StatusLogEntry {
            log_id: self.log_id,
            subject: LogSubject::File,
            subject_id: self.file_id,
            status,
            description: self.description,
            log_type,
            timestamp: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}
