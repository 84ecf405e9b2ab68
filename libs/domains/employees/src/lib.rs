//! Employees Domain
//!
//! Read-side access to employee records. Employees are created by an
//! external admin process; this crate filters, searches, counts and looks
//! them up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Filter normalization, search term policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Employee, filters, headcount projection
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_employees::{handlers, InMemoryEmployeeRepository, EmployeeService};
//!
//! let repository = InMemoryEmployeeRepository::new();
//! let service = EmployeeService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{EmployeeError, EmployeeResult};
pub use models::{DepartmentHeadCount, Employee, EmployeeFilter, SearchQuery, UNDEFINED_DEPARTMENT};
pub use postgres::PgEmployeeRepository;
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository};
pub use service::EmployeeService;
