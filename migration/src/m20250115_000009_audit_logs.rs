use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250115_000001_users::Users;

static IDX_AUDIT_LOGS_CREATED_AT: &str = "idx-audit_logs-created_at";
static FK_AUDIT_LOGS_USER_ID: &str = "fk-audit_logs-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuditLogs::Id))
                    .col(uuid_null(AuditLogs::UserId))
                    .col(string(AuditLogs::Action))
                    .col(string_null(AuditLogs::TableName))
                    .col(uuid_null(AuditLogs::RecordId))
                    .col(string_null(AuditLogs::IpAddress))
                    .col(string_null(AuditLogs::UserAgent))
                    .col(timestamp(AuditLogs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOGS_CREATED_AT)
                    .table(AuditLogs::Table)
                    .col(AuditLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_LOGS_USER_ID)
                    .from_tbl(AuditLogs::Table)
                    .from_col(AuditLogs::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
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
                    .name(FK_AUDIT_LOGS_USER_ID)
                    .table(AuditLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_LOGS_CREATED_AT)
                    .table(AuditLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuditLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    UserId,
    Action,
    TableName,
    RecordId,
    IpAddress,
    UserAgent,
    CreatedAt,
}
