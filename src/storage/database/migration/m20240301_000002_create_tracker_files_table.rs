use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_tracker_batches_table::TrackerBatches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackerFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackerFiles::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrackerFiles::FileId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TrackerFiles::BatchId).string().not_null())
                    .col(ColumnDef::new(TrackerFiles::FileName).string().not_null())
                    .col(ColumnDef::new(TrackerFiles::FilePath).text().not_null())
                    .col(ColumnDef::new(TrackerFiles::Status).string().not_null())
                    .col(
                        ColumnDef::new(TrackerFiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrackerFiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracker_files_batch_id")
                            .from(TrackerFiles::Table, TrackerFiles::BatchId)
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
                    .name("idx_tracker_files_batch_id")
                    .table(TrackerFiles::Table)
                    .col(TrackerFiles::BatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackerFiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum TrackerFiles {
    Table,
    Seq,
    FileId,
    BatchId,
    FileName,
    FilePath,
    Status,
    CreatedAt,
    UpdatedAt,
}
