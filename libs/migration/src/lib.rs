pub use sea_orm_migration::prelude::*;

mod m20250301_000000_create_employees;
mod m20250301_000001_create_projects;
mod m20250301_000002_create_project_employees;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_create_employees::Migration),
            Box::new(m20250301_000001_create_projects::Migration),
            Box::new(m20250301_000002_create_project_employees::Migration),
        ]
    }
}
