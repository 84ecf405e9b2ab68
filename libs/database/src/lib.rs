//! PostgreSQL access for the workforce services.
//!
//! - [`postgres`]: pooled connections with startup retry, migrations, health checks
//! - [`repository`]: `BaseRepository` shared by the domain repositories
//! - [`common`]: error type and exponential backoff
//!
//! Features:
//! - `config` - `core_config::FromEnv` for `PostgresConfig`
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(&config).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "workforce_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};
pub use repository::{is_unique_violation, BaseRepository};
