use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250115_000001_users::Users;

static FK_TIMESHEETS_WORKER_ID: &str = "fk-timesheets-worker_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timesheets::Table)
                    .if_not_exists()
                    .col(pk_uuid(Timesheets::Id))
                    .col(uuid(Timesheets::WorkerId))
                    .col(date(Timesheets::WeekStart))
                    .col(date(Timesheets::WeekEnd))
                    .col(double(Timesheets::TotalHours))
                    .col(string(Timesheets::Status))
                    .col(timestamp(Timesheets::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIMESHEETS_WORKER_ID)
                    .from_tbl(Timesheets::Table)
                    .from_col(Timesheets::WorkerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIMESHEETS_WORKER_ID)
                    .table(Timesheets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Timesheets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Timesheets {
    Table,
    Id,
    WorkerId,
    WeekStart,
    WeekEnd,
    TotalHours,
    Status,
    CreatedAt,
}
