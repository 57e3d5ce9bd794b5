use sea_orm_migration::prelude::*;

mod m20240301_000001_create_tracker_batches_table;
mod m20240301_000002_create_tracker_files_table;
mod m20240301_000003_create_tracker_log_tables;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_tracker_batches_table::Migration),
            Box::new(m20240301_000002_create_tracker_files_table::Migration),
            Box::new(m20240301_000003_create_tracker_log_tables::Migration),
        ]
    }
}
