use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250115_000001_users::Users, m20250115_000002_clients::Clients};

static IDX_SHIFTS_WORKER_START: &str = "idx-shifts-worker_id-start_time";
static FK_SHIFTS_WORKER_ID: &str = "fk-shifts-worker_id";
static FK_SHIFTS_CLIENT_ID: &str = "fk-shifts-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shifts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Shifts::Id))
                    .col(uuid(Shifts::WorkerId))
                    .col(uuid(Shifts::ClientId))
                    .col(timestamp(Shifts::StartTime))
                    .col(timestamp(Shifts::EndTime))
                    .col(string(Shifts::Status))
                    .col(text_null(Shifts::Notes))
                    .col(timestamp(Shifts::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIFTS_WORKER_START)
                    .table(Shifts::Table)
                    .col(Shifts::WorkerId)
                    .col(Shifts::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIFTS_WORKER_ID)
                    .from_tbl(Shifts::Table)
                    .from_col(Shifts::WorkerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIFTS_CLIENT_ID)
                    .from_tbl(Shifts::Table)
                    .from_col(Shifts::ClientId)
                    .to_tbl(Clients::Table)
                    .to_col(Clients::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIFTS_CLIENT_ID)
                    .table(Shifts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIFTS_WORKER_ID)
                    .table(Shifts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIFTS_WORKER_START)
                    .table(Shifts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shifts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shifts {
    Table,
    Id,
    WorkerId,
    ClientId,
    StartTime,
    EndTime,
    Status,
    Notes,
    CreatedAt,
}
