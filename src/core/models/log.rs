//! Append-only status log entries

use super::status::{LogType, ProcessStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity a log entry is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSubject {
    File,
    Batch,
}

/// Immutable record of a status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLogEntry {
    /// Backend-assigned sequence number, increasing in insertion order
    pub log_id: i64,
    /// Kind of entity the entry belongs to
    pub subject: LogSubject,
    /// File or batch ID
    pub subject_id: String,
    /// Status recorded by this entry
    pub status: ProcessStatus,
    /// Free-text description
    pub description: String,
    /// Log category
    pub log_type: LogType,
    /// When the entry was written
    pub timestamp: DateTime<Utc>,
}

/// Description written for batch status updates
pub fn batch_status_description(status: ProcessStatus, file_count: u32) -> String {
    format!("Batch status changed to {} ({} files)", status, file_count)
}
