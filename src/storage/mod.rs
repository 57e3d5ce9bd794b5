//! Storage layer for the tracker
//!
//! This module provides the persistence backends behind [`TrackerStore`].

/// Backend dispatch module
pub mod backend;
/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

pub use backend::StoreBackend;
pub use database::Database;
pub use memory::MemoryStore;

use crate::config::StorageConfig;
use crate::core::traits::TrackerStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Open the store described by `config`
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn TrackerStore>> {
    let backend = StoreBackend::new(config).await?;
    info!("Tracker store ready ({})", backend.backend_name());
    Ok(Arc::new(backend))
}
