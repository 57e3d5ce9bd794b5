//! SeaORM-backed tracker store
//!
//! Each write runs in one transaction so the row change and its log entry
//! land together or not at all. Reads that span several tables run in a
//! single transaction as well.

// Module declarations
mod types;
mod connection;
mod batch_ops;
mod file_ops;
mod log_ops;
mod tenant_ops;
mod store;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
