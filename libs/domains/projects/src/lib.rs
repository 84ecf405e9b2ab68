//! Projects Domain
//!
//! Projects and their employee assignments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌──────────────────┐
//! │   Service   │─────►│ EmployeeService  │  ← id resolution on create
//! └──────┬──────┘      └──────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Atomic create / assign (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Project, ProjectEmployee, request DTOs
//! └─────────────┘
//! ```
//!
//! Assignments are always loaded together with their project.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_employees::{EmployeeService, InMemoryEmployeeRepository};
//! use domain_projects::{handlers, InMemoryProjectRepository, ProjectService};
//!
//! let employees = EmployeeService::new(InMemoryEmployeeRepository::new());
//! let service = ProjectService::new(InMemoryProjectRepository::new(), employees);
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

pub use error::{ProjectError, ProjectResult};
pub use models::{AssignEmployee, CreateProject, NewProject, Project, ProjectEmployee, DEFAULT_STATUS};
pub use postgres::PgProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::ProjectService;
