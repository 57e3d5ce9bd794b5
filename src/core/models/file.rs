//! File record

use super::status::ProcessStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a single file within a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File ID, globally unique
    pub file_id: String,
    /// Owning batch
    pub batch_id: String,
    /// Display name
    pub file_name: String,
    /// Storage path
    pub file_path: String,
    /// Current status
    pub status: ProcessStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last status update timestamp
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(
        batch_id: impl Into<String>,
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            file_id: file_id.into(),
            batch_id: batch_id.into(),
            file_name: file_name.into(),
            file_path: file_path.into(),
            status: ProcessStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
