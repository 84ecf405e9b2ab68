use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(i32),

    /// Rendered by `AppError::Database`: 503 when the pool is exhausted, 500 otherwise
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;

impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => AppError::NotFound(format!("Employee {} not found", id)),
            EmployeeError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
