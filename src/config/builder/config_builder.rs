//! Main configuration builder implementation

use crate::config::{
    Config, DatabaseConfig, LogFormat, LoggingConfig, StorageConfig, StoreBackendKind,
    TrackerConfig, Validate,
};
use crate::utils::error::{Result, TrackerError};

/// Builder for [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    storage: StorageConfig,
    logging: LoggingConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage configuration
    pub fn with_storage(mut self, config: StorageConfig) -> Self {
        self.storage = config;
        self
    }

    /// Set the logging configuration
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging = config;
        self
    }

    /// Use the in-memory backend
    pub fn memory(mut self) -> Self {
        self.storage.backend = StoreBackendKind::Memory;
        self
    }

    /// Use the database backend at `url`
    pub fn database(mut self, url: impl Into<String>) -> Self {
        self.storage.backend = StoreBackendKind::Database;
        self.storage.database = DatabaseConfig {
            url: url.into(),
            ..self.storage.database
        };
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.storage.database.max_connections = max_connections;
        self
    }

    pub fn auto_migrate(mut self, enabled: bool) -> Self {
        self.storage.auto_migrate = enabled;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<Config> {
        let tracker = TrackerConfig {
            storage: self.storage,
            logging: self.logging,
        };
        tracker.validate().map_err(TrackerError::Config)?;
        Ok(Config { tracker })
    }
}
