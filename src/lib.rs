//! # ingest-tracker
//!
//! Multi-tenant tracking of file ingestion batches.
//!
//! A tenant creates a batch, registers files under it and reports status
//! transitions for both as processing advances. Every transition is recorded
//! in an append-only status log. All persistence goes through the
//! [`TrackerStore`] trait, implemented by an in-memory backend and a SeaORM
//! backend for SQLite and PostgreSQL.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ingest_tracker::{ConfigBuilder, LogType, ProcessStatus, storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigBuilder::new()
//!         .database("sqlite://data/tracker.db?mode=rwc")
//!         .build()?;
//!     let store = storage::connect(config.storage()).await?;
//!
//!     store.create_batch("tenant-a", "batch-1").await?;
//!     store.add_file("batch-1", "file-1", "invoice.pdf", "/in/invoice.pdf").await?;
//!     store
//!         .log_file_status("file-1", ProcessStatus::Processing, "parsing", LogType::Info)
//!         .await?;
//!
//!     for file in store.get_batch_files("tenant-a", "batch-1").await? {
//!         println!("{} {}", file.file_id, file.status);
//!     }
//!
//!     store.close().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{Config, ConfigBuilder, TrackerConfig};
pub use core::models::{
    BatchRecord, FileRecord, LogSubject, LogType, ProcessStatus, StatusLogEntry, StoreStats,
};
pub use core::traits::TrackerStore;
pub use storage::{MemoryStore, StoreBackend};
pub use utils::error::{Result, TrackerError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
