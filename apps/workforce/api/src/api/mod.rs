use axum::{middleware, routing::get, Router};
use axum_helpers::{jwt_auth_middleware, require_roles, JwtAuth, RequiredRoles};
use domain_employees::{EmployeeRepository, EmployeeService};
use domain_projects::{ProjectRepository, ProjectService};

use crate::roles::STAFF_ROLES;

pub mod employees;
pub mod health;
pub mod projects;

/// Creates the API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &crate::state::AppState) -> Router {
    let employees = employees::service(state);
    let projects = projects::service(state, employees.clone());

    router(employees, projects, state.jwt_auth.clone())
}

/// Employee and project routes behind bearer auth and the staff role guard.
///
/// The domain routers know nothing about auth; the policy lives here.
pub fn router<E, P>(
    employees: EmployeeService<E>,
    projects: ProjectService<P, E>,
    auth: JwtAuth,
) -> Router
where
    E: EmployeeRepository + 'static,
    P: ProjectRepository + 'static,
{
    let staff = RequiredRoles::any_of(STAFF_ROLES.iter().map(|r| r.to_string()));

    Router::new()
        .nest("/employees", domain_employees::handlers::router(employees))
        .nest("/projects", domain_projects::handlers::router(projects))
        // Layers run bottom-up: authenticate, then check roles.
        // Route layers leave unmatched paths to the JSON 404 fallback.
        .route_layer(middleware::from_fn_with_state(staff, require_roles))
        .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware))
}

/// `/ready` with real dependency checks; merged outside `/api`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum_helpers::JwtConfig;
    use chrono::{Duration, NaiveDate, Utc};
    use domain_employees::{Employee, InMemoryEmployeeRepository};
    use domain_projects::InMemoryProjectRepository;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const SECRET: &str = "workforce-test-secret-at-least-32-chars";

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET))
    }

    fn token(roles: &[Role]) -> String {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        auth()
            .create_access_token("42", "caller@example.com", "Caller", &roles)
            .unwrap()
    }

    fn app() -> Router {
        let employees = EmployeeService::new(InMemoryEmployeeRepository::with_employees(vec![
            Employee {
                id: 1,
                name: "Ada Lovelace".to_string(),
                department: Some("Engineering".to_string()),
                job_title: "Engineer".to_string(),
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                category: "Full-Time".to_string(),
                gender: "F".to_string(),
                email: "ada@example.com".to_string(),
            },
        ]));
        let projects = ProjectService::new(InMemoryProjectRepository::new(), employees.clone());

        router(employees, projects, auth())
    }

    fn get_with(uri: &str, bearer: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        for uri in ["/employees", "/projects", "/employees/headcount"] {
            let response = app().oneshot(get_with(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found_without_token() {
        for uri in ["/employees/1/extra", "/projects/upcoming/soon"] {
            let response = app().oneshot(get_with(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let response = app()
            .oneshot(get_with("/employees", Some("not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_employee_role_is_forbidden() {
        let token = token(&[Role::Employee]);

        for uri in ["/employees/1", "/projects/upcoming"] {
            let response = app().oneshot(get_with(uri, Some(&token))).await.unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", uri);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["message"], "Requires one of roles: HR, Admin");
        }
    }

    #[tokio::test]
    async fn test_hr_and_admin_are_allowed() {
        for role in [Role::Hr, Role::Admin] {
            let token = token(&[role]);
            let response = app()
                .oneshot(get_with("/employees/1", Some(&token)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{:?}", role);
        }
    }

    #[tokio::test]
    async fn test_access_token_cookie_is_accepted() {
        let request = Request::builder()
            .uri("/employees/headcount")
            .header(header::COOKIE, format!("access_token={}", token(&[Role::Hr])))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_and_assign_through_auth() {
        let app = app();
        let token = token(&[Role::Admin]);
        let start = Utc::now() + Duration::days(7);

        let create = Request::builder()
            .method("POST")
            .uri("/projects")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "name": "apollo",
                    "requiredSkills": ["rust"],
                    "startDate": start,
                    "endDate": start + Duration::days(30),
                    "employeeIds": [1, 2]
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let project: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(project["employees"].as_array().unwrap().len(), 1);

        let assign = |employee_id: i32| {
            Request::builder()
                .method("POST")
                .uri("/projects/assign")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "projectId": project["id"],
                        "employeeId": employee_id,
                        "employeeName": "Grace Hopper"
                    })
                    .to_string(),
                ))
                .unwrap()
        };

        let first = app.clone().oneshot(assign(2)).await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let duplicate = app.oneshot(assign(1)).await.unwrap();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    }
}
