use crate::config::DatabaseConfig;
use crate::utils::error::{Result, TrackerError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// How long a SQLite connection waits on a locked database file
#[cfg(feature = "sqlite")]
const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

impl SeaOrmDatabase {
    /// Open a connection pool for the configured database
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url).ok_or_else(|| {
            TrackerError::config(format!("Unsupported database URL: {}", config.url))
        })?;

        debug!("Database URL: {}", sanitize_url(&config.url));
        if backend_type == DatabaseBackendType::SQLite {
            Self::ensure_sqlite_dir(&config.url).await?;
        }

        let db = Self::try_connect(&config.url, config).await?;
        info!("Database connection established ({:?})", backend_type);

        Ok(Self {
            db,
            backend_type,
            closed: AtomicBool::new(false),
            write_lock: Mutex::new(()),
        })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        #[cfg(feature = "sqlite")]
        {
            use sea_orm::sqlx::sqlite::SqliteJournalMode;
            if sqlite_file_path(url).is_some() {
                opt.map_sqlx_sqlite_opts(|opts| {
                    opts.journal_mode(SqliteJournalMode::Wal)
                        .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS))
                });
            }
        }

        Database::connect(opt).await.map_err(|e| {
            warn!("Database connection failed: {}", e);
            TrackerError::from_db(e)
        })
    }

    /// Create the parent directory of a file-backed SQLite database
    async fn ensure_sqlite_dir(url: &str) -> Result<()> {
        let Some(path) = sqlite_file_path(url) else {
            return Ok(());
        };
        let Some(parent) = Path::new(path).parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || parent.exists() {
            return Ok(());
        }

        debug!("Creating SQLite data directory: {:?}", parent);
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            TrackerError::unavailable(format!("Failed to create data directory: {}", e))
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.ensure_open()?;
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            TrackerError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close the connection pool. Later calls are no-ops.
    pub(super) async fn close_pool(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        info!("Closing {} connection pool", self.backend_type.as_str());
        self.db.clone().close().await.map_err(TrackerError::from_db)
    }

    /// Health check
    pub(super) async fn ping(&self) -> Result<()> {
        debug!("Performing database health check");
        self.db.ping().await.map_err(|e| self.db_err(e))?;
        debug!("Database health check passed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub(super) fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(TrackerError::Closed);
        }
        Ok(())
    }

    /// Translate a raw database error, reporting `Closed` once the pool has
    /// been shut down underneath an in-flight call
    pub(super) fn db_err(&self, err: DbErr) -> TrackerError {
        self.guard(TrackerError::from_db(err))
    }

    /// Replace any error with `Closed` after shutdown
    pub(super) fn guard(&self, err: TrackerError) -> TrackerError {
        if self.is_closed() {
            return TrackerError::Closed;
        }
        if matches!(
            err,
            TrackerError::BackendUnavailable(_)
                | TrackerError::InvariantViolation(_)
                | TrackerError::Database(_)
        ) {
            warn!("{} backend fault: {}", self.backend_type.as_str(), err);
        }
        err
    }

    /// Begin a transaction for a multi-statement read
    pub(super) async fn begin_read(&self) -> Result<DatabaseTransaction> {
        let txn = match self.backend_type {
            DatabaseBackendType::PostgreSQL => {
                self.db
                    .begin_with_config(Some(IsolationLevel::RepeatableRead), None)
                    .await
            }
            DatabaseBackendType::SQLite => self.db.begin().await,
        };
        txn.map_err(|e| self.db_err(e))
    }

    /// Begin a transaction for a write.
    ///
    /// On SQLite the returned guard holds the writer lock and must stay alive
    /// until the transaction is committed or dropped.
    pub(super) async fn begin_write(
        &self,
    ) -> Result<(Option<MutexGuard<'_, ()>>, DatabaseTransaction)> {
        let writer = match self.backend_type {
            DatabaseBackendType::SQLite => Some(self.write_lock.lock().await),
            DatabaseBackendType::PostgreSQL => None,
        };
        self.ensure_open()?;
        let txn = self.db.begin().await.map_err(|e| self.db_err(e))?;
        Ok((writer, txn))
    }
}

/// Hide credentials of server URLs in log output
fn sanitize_url(url: &str) -> String {
    match url.split_once('@') {
        Some((_, host)) if !url.starts_with("sqlite:") => {
            let scheme = url.split("://").next().unwrap_or_default();
            format!("{}://***@{}", scheme, host)
        }
        _ => url.to_string(),
    }
}

/// Filesystem path of a SQLite URL, `None` for in-memory databases
fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        None
    } else {
        Some(path)
    }
}
