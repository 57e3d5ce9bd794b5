use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackerBatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackerBatches::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrackerBatches::BatchId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TrackerBatches::UserId).string().not_null())
                    .col(ColumnDef::new(TrackerBatches::Status).string().not_null())
                    .col(
                        ColumnDef::new(TrackerBatches::FileCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrackerBatches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrackerBatches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tracker_batches_user_id")
                    .table(TrackerBatches::Table)
                    .col(TrackerBatches::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackerBatches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum TrackerBatches {
    Table,
    Seq,
    BatchId,
    UserId,
    Status,
    FileCount,
    CreatedAt,
    UpdatedAt,
}
