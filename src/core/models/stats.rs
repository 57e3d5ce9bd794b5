//! Store-wide counters

use serde::{Deserialize, Serialize};

/// Totals across all tenants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of batches
    pub batches: u64,
    /// Number of files
    pub files: u64,
    /// Number of status log entries, file and batch
    pub logs: u64,
}
