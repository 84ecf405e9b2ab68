use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_employees::EmployeeError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(i32),

    #[error("Employee {employee_id} is already assigned to project {project_id}")]
    AlreadyAssigned { project_id: i32, employee_id: i32 },

    #[error("Project with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Employee lookup failed while resolving `employeeIds`
    #[error(transparent)]
    Employee(#[from] EmployeeError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Convert ProjectError to AppError for standardized error responses
impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => AppError::NotFound(format!("Project {} not found", id)),
            ProjectError::AlreadyAssigned {
                project_id,
                employee_id,
            } => AppError::Conflict(format!(
                "Employee {} is already assigned to project {}",
                employee_id, project_id
            )),
            ProjectError::DuplicateName(name) => {
                AppError::Conflict(format!("Project with name '{}' already exists", name))
            }
            ProjectError::Validation(msg) => AppError::BadRequest(msg),
            ProjectError::Employee(e) => e.into(),
            ProjectError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
