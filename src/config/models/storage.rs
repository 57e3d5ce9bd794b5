//! Storage configuration

use super::{default_connection_timeout, default_max_connections};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which store implementation to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    /// Process-local store, state is lost on exit
    Memory,
    /// Relational store through SeaORM
    #[default]
    Database,
}

impl fmt::Display for StoreBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackendKind::Memory => f.write_str("memory"),
            StoreBackendKind::Database => f.write_str("database"),
        }
    }
}

impl FromStr for StoreBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackendKind::Memory),
            "database" | "db" => Ok(StoreBackendKind::Database),
            _ => Err(format!("Unsupported storage backend: {}", s)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StoreBackendKind,
    /// Run pending migrations when connecting
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
    /// Database configuration, used by the `database` backend
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackendKind::default(),
            auto_migrate: default_auto_migrate(),
            database: DatabaseConfig::default(),
        }
    }
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.backend = other.backend;
        self.auto_migrate = other.auto_migrate;
        self.database = self.database.merge(other.database);
        self
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL, `sqlite:` or `postgres://`
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    pub fn is_postgres(&self) -> bool {
        self.url.starts_with("postgresql://") || self.url.starts_with("postgres://")
    }
}

fn default_auto_migrate() -> bool {
    true
}

pub fn default_database_url() -> String {
    "sqlite://data/tracker.db?mode=rwc".to_string()
}
