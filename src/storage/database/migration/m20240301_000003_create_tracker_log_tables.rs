use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_tracker_batches_table::TrackerBatches;
use super::m20240301_000002_create_tracker_files_table::TrackerFiles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // File status log
        manager
            .create_table(
                Table::create()
                    .table(TrackerFileLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackerFileLogs::LogId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackerFileLogs::FileId).string().not_null())
                    .col(ColumnDef::new(TrackerFileLogs::Status).string().not_null())
                    .col(ColumnDef::new(TrackerFileLogs::Description).text().not_null())
                    .col(ColumnDef::new(TrackerFileLogs::LogType).string().not_null())
                    .col(
                        ColumnDef::new(TrackerFileLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracker_file_logs_file_id")
                            .from(TrackerFileLogs::Table, TrackerFileLogs::FileId)
                            .to(TrackerFiles::Table, TrackerFiles::FileId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tracker_file_logs_file_id")
                    .table(TrackerFileLogs::Table)
                    .col(TrackerFileLogs::FileId)
                    .to_owned(),
            )
            .await?;

        // Batch status log
        manager
            .create_table(
                Table::create()
                    .table(TrackerBatchLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackerBatchLogs::LogId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackerBatchLogs::BatchId).string().not_null())
                    .col(ColumnDef::new(TrackerBatchLogs::Status).string().not_null())
                    .col(ColumnDef::new(TrackerBatchLogs::Description).text().not_null())
                    .col(ColumnDef::new(TrackerBatchLogs::LogType).string().not_null())
                    .col(
                        ColumnDef::new(TrackerBatchLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracker_batch_logs_batch_id")
                            .from(TrackerBatchLogs::Table, TrackerBatchLogs::BatchId)
                            .to(TrackerBatches::Table, TrackerBatches::BatchId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tracker_batch_logs_batch_id")
                    .table(TrackerBatchLogs::Table)
                    .col(TrackerBatchLogs::BatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackerBatchLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrackerFileLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrackerFileLogs {
    Table,
    LogId,
    FileId,
    Status,
    Description,
    LogType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TrackerBatchLogs {
    Table,
    LogId,
    BatchId,
    Status,
    Description,
    LogType,
    CreatedAt,
}
