use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestQueryResponse, DatabaseUnavailableResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    ApiQuery, IdPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EmployeeResult;
use crate::models::{DepartmentHeadCount, Employee, EmployeeFilter, SearchQuery};
use crate::repository::EmployeeRepository;
use crate::service::EmployeeService;

const TAG: &str = "employees";

/// OpenAPI documentation for the Employees API
#[derive(OpenApi)]
#[openapi(
    paths(list_employees, get_employee, department_headcount, search_employees),
    components(
        schemas(Employee, EmployeeFilter, DepartmentHeadCount),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse,
            DatabaseUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Employee lookup, search and headcount")
    )
)]
pub struct ApiDoc;

/// Create the employee router
pub fn router<R: EmployeeRepository + 'static>(service: EmployeeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_employees))
        .route("/headcount", get(department_headcount))
        .route("/search", get(search_employees))
        .route("/{id}", get(get_employee))
        .with_state(shared_service)
}

/// List employees, optionally filtered by department, job title or id
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(EmployeeFilter),
    responses(
        (status = 200, description = "Employees matching every filter", body = Vec<Employee>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn list_employees<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    ApiQuery(filter): ApiQuery<EmployeeFilter>,
) -> EmployeeResult<Json<Vec<Employee>>> {
    let employees = service.list_employees(filter).await?;
    Ok(Json(employees))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_employee<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(id): IdPath,
) -> EmployeeResult<Json<Employee>> {
    let employee = service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Employee count per department
#[utoipa::path(
    get,
    path = "/headcount",
    tag = TAG,
    responses(
        (status = 200, description = "One record per department; null departments are reported as \"Undefined\"", body = Vec<DepartmentHeadCount>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn department_headcount<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
) -> EmployeeResult<Json<Vec<DepartmentHeadCount>>> {
    let counts = service.department_headcount().await?;
    Ok(Json(counts))
}

/// Search employees by name, department or job title
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching employees, empty for a blank term", body = Vec<Employee>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn search_employees<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> EmployeeResult<Json<Vec<Employee>>> {
    let employees = service.search_employees(query.term.as_deref()).await?;
    Ok(Json(employees))
}
