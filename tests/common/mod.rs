//! Common test utilities for ingest-tracker
//!
//! This module provides shared test infrastructure for all tests:
//! - In-memory SQLite database support
//! - Test fixtures for seeding batches and files
//! - The backend conformance harness
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{conformance, database};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = database::TestDatabase::new().await;
//!     conformance::create_then_get(db.store()).await;
//! }
//! ```

pub mod conformance;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::BatchFixture;

/// Assert that a store call failed with the given error variant
#[macro_export]
macro_rules! assert_store_err {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            other => panic!(
                "Expected {} but got {:?}",
                stringify!($pattern),
                other
            ),
        }
    };
}

/// Instantiate every conformance check as a test against one backend
#[macro_export]
macro_rules! conformance_suite {
    ($make:expr => $($name:ident),+ $(,)?) => {
        $(
            #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
            async fn $name() {
                let handle = $crate::common::database::StoreHandle::from($make.await);
                $crate::common::conformance::$name(handle.store()).await;
            }
        )+
    };
    ($make:expr) => {
        $crate::conformance_suite!($make =>
            create_then_get,
            duplicate_batch_rejected_across_tenants,
            add_file_requires_batch,
            duplicate_file_rejected,
            files_listed_once_in_insertion_order,
            user_batches_in_creation_order,
            last_log_matches_last_status,
            batch_status_updates_file_count,
            unknown_ids_are_not_found,
            tenant_isolation_on_scoped_calls,
            delete_file_logs_keeps_file,
            delete_file_checks_ownership_chain,
            delete_batch_cascades,
            delete_all_isolates_tenants,
            delete_all_on_empty_tenant,
            example_scenario,
            concurrent_status_updates,
            concurrent_delete_and_update,
            concurrent_create_same_batch,
            stats_track_rows,
            close_is_idempotent,
        );
    };
}
