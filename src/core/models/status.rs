//! Lifecycle status and log category enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state applied to batches and files.
///
/// The variant order is the declared lifecycle order; the store does not
/// enforce it on transitions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Registered, not yet picked up
    #[default]
    Pending,
    /// Work in progress
    Processing,
    /// Finished successfully
    Completed,
    /// Finished with an error
    Failed,
}

impl ProcessStatus {
    /// All statuses in lifecycle order
    pub const ALL: [ProcessStatus; 4] = [
        ProcessStatus::Pending,
        ProcessStatus::Processing,
        ProcessStatus::Completed,
        ProcessStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Pending => "pending",
            ProcessStatus::Processing => "processing",
            ProcessStatus::Completed => "completed",
            ProcessStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ProcessStatus::Pending),
            "processing" => Ok(ProcessStatus::Processing),
            "completed" => Ok(ProcessStatus::Completed),
            "failed" => Ok(ProcessStatus::Failed),
            _ => Err(format!("Invalid process status: {}", s)),
        }
    }
}

/// Category of a status log entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Info => "info",
            LogType::Success => "success",
            LogType::Warning => "warning",
            LogType::Error => "error",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogType::Info),
            "success" => Ok(LogType::Success),
            "warn" | "warning" => Ok(LogType::Warning),
            "error" => Ok(LogType::Error),
            _ => Err(format!("Invalid log type: {}", s)),
        }
    }
}
