use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        DatabaseUnavailableResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    IdPath, ValidatedJson,
};
use domain_employees::EmployeeRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProjectResult;
use crate::models::{AssignEmployee, CreateProject, Project, ProjectEmployee};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

const TAG: &str = "projects";

/// Public path of the projects collection, used for `Location` headers.
pub const PROJECTS_PATH: &str = "/api/projects";

/// OpenAPI documentation for Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        upcoming_projects,
        assign_employee,
    ),
    components(
        schemas(Project, ProjectEmployee, CreateProject, AssignEmployee),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse,
            DatabaseUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Project management and employee assignment")
    )
)]
pub struct ApiDoc;

type SharedService<R, E> = State<Arc<ProjectService<R, E>>>;

/// Create the project router with all HTTP endpoints
pub fn router<R, E>(service: ProjectService<R, E>) -> Router
where
    R: ProjectRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/upcoming", get(upcoming_projects))
        .route("/assign", post(assign_employee))
        .route("/{id}", get(get_project))
        .with_state(shared_service)
}

/// List all projects with their assigned employees
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn list_projects<R: ProjectRepository, E: EmployeeRepository>(
    State(service): SharedService<R, E>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.list_projects().await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created; unknown employee ids are skipped", body = Project,
            headers(("Location" = String, description = "URL of the new project"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn create_project<R: ProjectRepository, E: EmployeeRepository>(
    State(service): SharedService<R, E>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create_project(input).await?;
    let location = format!("{}/{}", PROJECTS_PATH, project.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(project),
    ))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_project<R: ProjectRepository, E: EmployeeRepository>(
    State(service): SharedService<R, E>,
    IdPath(id): IdPath,
) -> ProjectResult<Json<Project>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Projects starting in the future
#[utoipa::path(
    get,
    path = "/upcoming",
    tag = TAG,
    responses(
        (status = 200, description = "Projects with a start date after now", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn upcoming_projects<R: ProjectRepository, E: EmployeeRepository>(
    State(service): SharedService<R, E>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.upcoming_projects().await?;
    Ok(Json(projects))
}

/// Assign an employee to a project
#[utoipa::path(
    post,
    path = "/assign",
    tag = TAG,
    request_body = AssignEmployee,
    responses(
        (status = 204, description = "Employee assigned"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn assign_employee<R: ProjectRepository, E: EmployeeRepository>(
    State(service): SharedService<R, E>,
    ValidatedJson(input): ValidatedJson<AssignEmployee>,
) -> ProjectResult<StatusCode> {
    service.assign_employee(input).await?;
    Ok(StatusCode::NO_CONTENT)
}
