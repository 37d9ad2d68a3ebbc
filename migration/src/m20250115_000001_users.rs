use sea_orm_migration::{prelude::*, schema::*};

static IDX_USERS_ROLE: &str = "idx-users-role";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::FullName))
                    .col(string(Users::Role))
                    .col(string_null(Users::Phone))
                    .col(string_null(Users::Address))
                    .col(string_null(Users::EmergencyContactName))
                    .col(string_null(Users::EmergencyContactPhone))
                    .col(double_null(Users::HourlyRate))
                    .col(date_null(Users::HireDate))
                    .col(boolean(Users::IsActive))
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp_null(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_ROLE)
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USERS_ROLE)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    FullName,
    Role,
    Phone,
    Address,
    EmergencyContactName,
    EmergencyContactPhone,
    HourlyRate,
    HireDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
