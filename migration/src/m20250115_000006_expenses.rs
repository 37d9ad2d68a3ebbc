use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250115_000001_users::Users;

static FK_EXPENSES_WORKER_ID: &str = "fk-expenses-worker_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk_uuid(Expenses::Id))
                    .col(uuid(Expenses::WorkerId))
                    .col(string(Expenses::Description))
                    .col(string_null(Expenses::Category))
                    .col(double(Expenses::Amount))
                    .col(date(Expenses::ExpenseDate))
                    .col(string(Expenses::Status))
                    .col(timestamp(Expenses::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPENSES_WORKER_ID)
                    .from_tbl(Expenses::Table)
                    .from_col(Expenses::WorkerId)
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
                    .name(FK_EXPENSES_WORKER_ID)
                    .table(Expenses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    WorkerId,
    Description,
    Category,
    Amount,
    ExpenseDate,
    Status,
    CreatedAt,
}
