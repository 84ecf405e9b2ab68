//! Handler tests for the Employees domain
//!
//! Exercise the employee router on its own (no auth layer) against the
//! in-memory repository:
//! - query string parsing and blank-filter handling
//! - status codes for found / missing / malformed ids
//! - JSON field naming

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use domain_employees::*;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn employee(id: i32, name: &str, department: Option<&str>, job_title: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        department: department.map(str::to_string),
        job_title: job_title.to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 4, 11).unwrap(),
        category: "Full-Time".to_string(),
        gender: "F".to_string(),
        email: format!("employee{}@example.com", id),
    }
}

fn app() -> Router {
    let repo = InMemoryEmployeeRepository::with_employees(vec![
        employee(1, "Ada Lovelace", Some("Engineering"), "Engineer"),
        employee(2, "Grace Hopper", Some("Engineering"), "Manager"),
        employee(3, "Alan Turing", None, "Engineer"),
        employee(4, "Joan Clarke", Some("Research"), "Analyst"),
    ]);
    handlers::router(EmployeeService::new(repo))
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_list_employees_without_filters_returns_all() {
    let response = get(app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let employees: Vec<Employee> = json_body(response.into_body()).await;
    let ids: Vec<i32> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_list_employees_combines_filters() {
    let response = get(app(), "/?department=Engineering&jobTitle=Engineer").await;
    assert_eq!(response.status(), StatusCode::OK);

    let employees: Vec<Employee> = json_body(response.into_body()).await;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn test_list_employees_ignores_blank_filters() {
    let response = get(app(), "/?department=&jobTitle=%20%20Engineer%20").await;
    assert_eq!(response.status(), StatusCode::OK);

    let employees: Vec<Employee> = json_body(response.into_body()).await;
    let ids: Vec<i32> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_list_employees_by_employee_id() {
    let response = get(app(), "/?employeeID=4").await;
    let employees: Vec<Employee> = json_body(response.into_body()).await;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, 4);
}

#[tokio::test]
async fn test_list_employees_rejects_non_numeric_employee_id() {
    let response = get(app(), "/?employeeID=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_get_employee_returns_camel_case_json() {
    let response = get(app(), "/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["jobTitle"], "Manager");
    assert_eq!(body["startDate"], "2022-04-11");
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let response = get(app(), "/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Employee 999 not found");
}

#[tokio::test]
async fn test_get_employee_invalid_id() {
    let response = get(app(), "/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_PATH_PARAM");
}

#[tokio::test]
async fn test_headcount_route() {
    let response = get(app(), "/headcount").await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut counts: Vec<DepartmentHeadCount> = json_body(response.into_body()).await;
    counts.sort_by(|a, b| a.department.cmp(&b.department));

    let pairs: Vec<(&str, i64)> = counts
        .iter()
        .map(|c| (c.department.as_str(), c.count))
        .collect();
    assert_eq!(
        pairs,
        vec![("Engineering", 2), ("Research", 1), ("Undefined", 1)]
    );
}

#[tokio::test]
async fn test_search_route_is_case_insensitive() {
    let upper: Vec<Employee> = json_body(get(app(), "/search?term=ENGINEER").await.into_body()).await;
    let lower: Vec<Employee> = json_body(get(app(), "/search?term=engineer").await.into_body()).await;

    assert_eq!(upper, lower);
    // "Engineer" titles plus both members of "Engineering"
    assert_eq!(upper.len(), 3);
}

#[tokio::test]
async fn test_search_route_blank_term_returns_empty_array() {
    for uri in ["/search", "/search?term=", "/search?term=%20%20%20"] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);

        let employees: Vec<Employee> = json_body(response.into_body()).await;
        assert!(employees.is_empty(), "{}", uri);
    }
}
