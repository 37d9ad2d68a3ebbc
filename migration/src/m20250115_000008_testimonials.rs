use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(pk_uuid(Testimonials::Id))
                    .col(string(Testimonials::Name))
                    .col(string(Testimonials::Email))
                    .col(integer(Testimonials::Rating))
                    .col(text(Testimonials::Text))
                    .col(string_null(Testimonials::Location))
                    .col(boolean(Testimonials::IsApproved))
                    .col(timestamp(Testimonials::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Email,
    Rating,
    Text,
    Location,
    IsApproved,
    CreatedAt,
}
