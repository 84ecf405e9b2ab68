//! Observability utilities for the workforce API.
//!
//! - Prometheus recorder installation and `/metrics` rendering
//! - HTTP request metrics middleware
//! - Workforce counters (employee queries, project creation, assignments)
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, WorkforceMetrics};
//!
//! init_metrics()?;
//! WorkforceMetrics::record_project_created(3);
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod workforce;

pub use middleware::metrics_middleware;
pub use workforce::{AssignmentOutcome, WorkforceMetrics};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder.
///
/// Idempotent: later calls return the handle from the first success.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP responses with 4xx or 5xx status"
    );

    describe_counter!(
        "employee_queries_total",
        "Employee read operations by kind"
    );
    describe_histogram!(
        "employee_query_results",
        "Number of employees returned per query"
    );
    describe_counter!("projects_created_total", "Projects created");
    describe_histogram!(
        "project_initial_assignments",
        "Employees assigned when a project is created"
    );
    describe_counter!(
        "project_assignments_total",
        "Project assignment attempts by outcome"
    );
}
