use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string_len_uniq(Projects::Name, 100))
                    .col(string_len(Projects::Status, 50).default("Pending"))
                    .col(json(Projects::RequiredSkills).default("[]"))
                    .col(timestamp_with_time_zone(Projects::StartDate))
                    .col(timestamp_with_time_zone(Projects::EndDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_start_date")
                    .table(Projects::Table)
                    .col(Projects::StartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Projects {
    Table,
    Id,
    Name,
    Status,
    RequiredSkills,
    StartDate,
    EndDate,
}
