use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::Name, 100))
                    .col(string_len_null(Employees::Department, 50))
                    .col(string_len(Employees::JobTitle, 50))
                    .col(date(Employees::StartDate))
                    .col(string_len(Employees::Category, 20).default("Full-Time"))
                    .col(string_len(Employees::Gender, 10))
                    .col(string_len_uniq(Employees::Email, 255))
                    .to_owned(),
            )
            .await?;

        // Equality filters on the listing endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_department")
                    .table(Employees::Table)
                    .col(Employees::Department)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_job_title")
                    .table(Employees::Table)
                    .col(Employees::JobTitle)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Employees {
    Table,
    Id,
    Name,
    Department,
    JobTitle,
    StartDate,
    Category,
    Gender,
    Email,
}
