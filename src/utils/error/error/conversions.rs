//! Translation of backend faults into the tracker taxonomy

use super::types::TrackerError;
use sea_orm::{DbErr, SqlErr};

impl TrackerError {
    /// Translate a SeaORM error into the store taxonomy.
    ///
    /// Statements issued by the store are well formed, so an execution
    /// failure that is not a constraint violation is treated as an
    /// environmental fault (busy database, dropped connection, serialization
    /// failure) and surfaced as `BackendUnavailable`.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return TrackerError::DuplicateKey(msg);
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return TrackerError::NotFound(format!("Referenced entity missing: {}", msg));
            }
            _ => {}
        }

        match err {
            DbErr::ConnectionAcquire(e) => TrackerError::BackendUnavailable(e.to_string()),
            DbErr::Conn(e) => TrackerError::BackendUnavailable(e.to_string()),
            DbErr::Exec(e) | DbErr::Query(e) => TrackerError::BackendUnavailable(e.to_string()),
            DbErr::RecordNotFound(msg) => TrackerError::NotFound(msg),
            DbErr::RecordNotUpdated => TrackerError::NotFound("Record not updated".to_string()),
            DbErr::Migration(_) | DbErr::Custom(_) => TrackerError::Database(err),
            other => TrackerError::InvariantViolation(other.to_string()),
        }
    }
}
