//! Configuration loading utilities
//!
//! This module loads configuration overrides from environment variables.

use super::models::*;
use crate::utils::error::{Result, TrackerError};
use std::env;
use tracing::debug;

impl TrackerConfig {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub(crate) fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Storage configuration
        if let Some(backend) = lookup("TRACKER_STORAGE_BACKEND") {
            self.storage.backend = backend.parse().map_err(TrackerError::Config)?;
        }
        if let Some(auto_migrate) = lookup("TRACKER_AUTO_MIGRATE") {
            self.storage.auto_migrate = auto_migrate
                .parse()
                .map_err(|e| TrackerError::config(format!("Invalid auto migrate flag: {}", e)))?;
        }

        // Database configuration
        if let Some(db_url) = lookup("DATABASE_URL") {
            self.storage.database.url = db_url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| TrackerError::config(format!("Invalid max connections: {}", e)))?;
        }
        if let Some(timeout) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.storage.database.connection_timeout = timeout
                .parse()
                .map_err(|e| TrackerError::config(format!("Invalid connection timeout: {}", e)))?;
        }

        // Logging configuration
        if let Some(level) = lookup("TRACKER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TRACKER_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(TrackerError::Config)?;
        }

        Ok(())
    }
}
