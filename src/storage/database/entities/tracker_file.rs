use crate::core::models::FileRecord;
use crate::utils::error::TrackerError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// File database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tracker_files")]
pub struct Model {
    /// Insertion sequence, defines order within a batch
    #[sea_orm(primary_key)]
    pub seq: i64,

    /// File ID, globally unique
    #[sea_orm(unique)]
    pub file_id: String,

    /// Owning batch
    pub batch_id: String,

    /// Display name
    pub file_name: String,

    /// Storage path
    pub file_path: String,

    /// Process status (lower-case text form)
    pub status: String,

    /// File creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last status update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// File entity relations
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
    /// Status log of the file
    #[sea_orm(has_many = "super::tracker_file_log::Entity")]
    FileLog,
}

impl Related<super::tracker_batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::tracker_file_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record
    pub fn to_domain(self) -> crate::utils::error::Result<FileRecord> {
        let status = self.status.parse().map_err(|e: String| {
            TrackerError::invariant(format!("File {}: {}", self.file_id, e))
        })?;

        Ok(FileRecord {
            file_id: self.file_id,
            batch_id: self.batch_id,
            file_name: self.file_name,
            file_path: self.file_path,
            status,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
