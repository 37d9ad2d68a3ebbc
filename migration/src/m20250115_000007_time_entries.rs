use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250115_000001_users::Users, m20250115_000003_shifts::Shifts};

static IDX_TIME_ENTRIES_WORKER_STATUS: &str = "idx-time_entries-worker_id-status";
static FK_TIME_ENTRIES_WORKER_ID: &str = "fk-time_entries-worker_id";
static FK_TIME_ENTRIES_SHIFT_ID: &str = "fk-time_entries-shift_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeEntries::Table)
                    .if_not_exists()
                    .col(pk_uuid(TimeEntries::Id))
                    .col(uuid(TimeEntries::WorkerId))
                    .col(uuid_null(TimeEntries::ShiftId))
                    .col(timestamp(TimeEntries::ClockIn))
                    .col(timestamp_null(TimeEntries::ClockOut))
                    .col(string(TimeEntries::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TIME_ENTRIES_WORKER_STATUS)
                    .table(TimeEntries::Table)
                    .col(TimeEntries::WorkerId)
                    .col(TimeEntries::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIME_ENTRIES_WORKER_ID)
                    .from_tbl(TimeEntries::Table)
                    .from_col(TimeEntries::WorkerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIME_ENTRIES_SHIFT_ID)
                    .from_tbl(TimeEntries::Table)
                    .from_col(TimeEntries::ShiftId)
                    .to_tbl(Shifts::Table)
                    .to_col(Shifts::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIME_ENTRIES_SHIFT_ID)
                    .table(TimeEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIME_ENTRIES_WORKER_ID)
                    .table(TimeEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TIME_ENTRIES_WORKER_STATUS)
                    .table(TimeEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TimeEntries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TimeEntries {
    Table,
    Id,
    WorkerId,
    ShiftId,
    ClockIn,
    ClockOut,
    Status,
}
