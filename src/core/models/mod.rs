//! Core data models for the tracker
//!
//! This module defines the batch, file and status log records shared by every
//! storage backend.

pub mod batch;
pub mod file;
pub mod log;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use batch::BatchRecord;
pub use file::FileRecord;
pub use log::{LogSubject, StatusLogEntry, batch_status_description};
pub use stats::StoreStats;
pub use status::{LogType, ProcessStatus};
