use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // employee_id carries no foreign key; employee_name is a snapshot
        // taken at assignment time.
        manager
            .create_table(
                Table::create()
                    .table(ProjectEmployees::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectEmployees::Id))
                    .col(integer(ProjectEmployees::ProjectId))
                    .col(integer(ProjectEmployees::EmployeeId))
                    .col(string_len(ProjectEmployees::EmployeeName, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_employees_project_id")
                            .from(ProjectEmployees::Table, ProjectEmployees::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_project_employees_project_employee")
                    .table(ProjectEmployees::Table)
                    .col(ProjectEmployees::ProjectId)
                    .col(ProjectEmployees::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectEmployees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectEmployees {
    Table,
    Id,
    ProjectId,
    EmployeeId,
    EmployeeName,
}
