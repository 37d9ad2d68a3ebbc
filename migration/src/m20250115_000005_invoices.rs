use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250115_000002_clients::Clients;

static FK_INVOICES_CLIENT_ID: &str = "fk-invoices-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_uuid(Invoices::Id))
                    .col(uuid(Invoices::ClientId))
                    .col(string_uniq(Invoices::InvoiceNumber))
                    .col(date(Invoices::IssueDate))
                    .col(date(Invoices::DueDate))
                    .col(double(Invoices::Subtotal))
                    .col(double(Invoices::TaxAmount))
                    .col(double(Invoices::TotalAmount))
                    .col(string(Invoices::Status))
                    .col(text_null(Invoices::Notes))
                    .col(timestamp(Invoices::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICES_CLIENT_ID)
                    .from_tbl(Invoices::Table)
                    .from_col(Invoices::ClientId)
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
                    .name(FK_INVOICES_CLIENT_ID)
                    .table(Invoices::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
    ClientId,
    InvoiceNumber,
    IssueDate,
    DueDate,
    Subtotal,
    TaxAmount,
    TotalAmount,
    Status,
    Notes,
    CreatedAt,
}
