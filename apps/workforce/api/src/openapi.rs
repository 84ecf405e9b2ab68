use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Workforce API",
        version = "0.1.0",
        description = "Employee lookup, search and headcount; project creation and assignment. \
                       All endpoints require a bearer token carrying the HR or Admin role."
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/employees", api = domain_employees::handlers::ApiDoc),
        (path = "/projects", api = domain_projects::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
