use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(pk_uuid(Clients::Id))
                    .col(string(Clients::FullName))
                    .col(string_null(Clients::Email))
                    .col(string_null(Clients::Phone))
                    .col(string_null(Clients::Address))
                    .col(string_null(Clients::EmergencyContactName))
                    .col(string_null(Clients::EmergencyContactPhone))
                    .col(string(Clients::CareLevel))
                    .col(text_null(Clients::MedicalConditions))
                    .col(text_null(Clients::Medications))
                    .col(text_null(Clients::CareNotes))
                    .col(boolean(Clients::IsActive))
                    .col(timestamp(Clients::CreatedAt))
                    .col(timestamp_null(Clients::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Clients {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    Address,
    EmergencyContactName,
    EmergencyContactPhone,
    CareLevel,
    MedicalConditions,
    Medications,
    CareNotes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
