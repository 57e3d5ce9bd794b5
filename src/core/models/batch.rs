//! Batch record

use super::status::ProcessStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a tenant-owned batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Batch ID, unique across all tenants
    pub batch_id: String,
    /// Owning tenant
    pub user_id: String,
    /// Current status
    pub status: ProcessStatus,
    /// File count supplied by the last status update
    pub file_count: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last status update timestamp
    pub updated_at: DateTime<Utc>,
}

impl BatchRecord {
    /// A freshly created batch: pending, no files
    pub fn new(user_id: impl Into<String>, batch_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            batch_id: batch_id.into(),
            user_id: user_id.into(),
            status: ProcessStatus::Pending,
            file_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
