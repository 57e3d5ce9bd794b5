use sea_orm::DatabaseConnection;
use std::sync::atomic::AtomicBool;
use tokio::sync::Mutex;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
    /// Set once by `close()`
    pub(super) closed: AtomicBool,
    /// Serializes SQLite write transactions, which cannot upgrade a shared
    /// lock while another connection holds one
    pub(super) write_lock: Mutex<()>,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Detect the backend from a connection URL
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::PostgreSQL)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostgreSQL => "postgres",
            Self::SQLite => "sqlite",
        }
    }
}
