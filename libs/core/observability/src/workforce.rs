//! Workforce domain counters.

use metrics::{counter, histogram};

/// Result of a project assignment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    Assigned,
    AlreadyAssigned,
    ProjectNotFound,
    Failed,
}

impl AssignmentOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::AlreadyAssigned => "already_assigned",
            Self::ProjectNotFound => "project_not_found",
            Self::Failed => "failed",
        }
    }
}

/// Workforce metrics recorder
pub struct WorkforceMetrics;

impl WorkforceMetrics {
    /// Record an employee read; `kind` is one of `list`, `get`, `search`,
    /// `headcount` or `bulk`.
    pub fn record_employee_query(kind: &'static str, results: usize) {
        counter!("employee_queries_total", "kind" => kind).increment(1);
        histogram!("employee_query_results", "kind" => kind).record(results as f64);

        tracing::debug!(kind, results, "Employee query");
    }

    pub fn record_project_created(initial_assignments: usize) {
        counter!("projects_created_total").increment(1);
        histogram!("project_initial_assignments").record(initial_assignments as f64);
    }

    pub fn record_assignment(outcome: AssignmentOutcome) {
        counter!("project_assignments_total", "outcome" => outcome.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_assignment_outcomes_are_labelled() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            WorkforceMetrics::record_assignment(AssignmentOutcome::Assigned);
            WorkforceMetrics::record_assignment(AssignmentOutcome::AlreadyAssigned);
            WorkforceMetrics::record_assignment(AssignmentOutcome::AlreadyAssigned);
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"project_assignments_total{outcome="assigned"} 1"#));
        assert!(rendered.contains(r#"project_assignments_total{outcome="already_assigned"} 2"#));
    }

    #[test]
    fn test_employee_queries_counted_by_kind() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            WorkforceMetrics::record_employee_query("search", 3);
            WorkforceMetrics::record_project_created(2);
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"employee_queries_total{kind="search"} 1"#));
        assert!(rendered.contains("projects_created_total 1"));
    }
}
