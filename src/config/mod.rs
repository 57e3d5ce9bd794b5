//! Configuration management for the tracker
//!
//! This module handles loading, validation, and management of tracker configuration.

pub mod builder;
mod loader;
pub mod models;
pub mod validation;

pub use builder::ConfigBuilder;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, TrackerError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the tracker
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tracker configuration
    pub tracker: TrackerConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TrackerError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let tracker: TrackerConfig = serde_yaml::from_str(content)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { tracker };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let tracker = TrackerConfig::from_env()?;
        let config = Self { tracker };

        config.validate()?;
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.tracker.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.tracker.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.tracker
            .storage
            .validate()
            .map_err(|e| TrackerError::Config(format!("Storage config error: {}", e)))?;

        self.tracker
            .logging
            .validate()
            .map_err(|e| TrackerError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.tracker = self.tracker.merge(other.tracker);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.tracker)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
