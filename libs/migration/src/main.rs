//! Migration CLI, e.g. `DATABASE_URL=postgres://... migration up`.
//! The API also applies pending migrations at startup unless
//! `RUN_MIGRATIONS=false`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
