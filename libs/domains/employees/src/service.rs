use observability::WorkforceMetrics;
use std::sync::Arc;

use crate::error::{EmployeeError, EmployeeResult};
use crate::models::{DepartmentHeadCount, Employee, EmployeeFilter};
use crate::repository::EmployeeRepository;

/// Service layer for employee queries
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List employees matching all non-blank filters
    pub async fn list_employees(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>> {
        let employees = self.repository.list(filter.normalized()).await?;
        WorkforceMetrics::record_employee_query("list", employees.len());
        Ok(employees)
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: i32) -> EmployeeResult<Employee> {
        let employee = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;
        WorkforceMetrics::record_employee_query("get", 1);
        Ok(employee)
    }

    /// Resolve a list of ids, silently skipping unknown ones
    pub async fn get_employees_by_ids(&self, ids: &[i32]) -> EmployeeResult<Vec<Employee>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let employees = self.repository.get_by_ids(ids.to_vec()).await?;
        WorkforceMetrics::record_employee_query("bulk", employees.len());
        Ok(employees)
    }

    /// Case-insensitive substring search over name, department and job title.
    ///
    /// A missing or blank term returns no employees without touching the
    /// repository.
    pub async fn search_employees(&self, term: Option<&str>) -> EmployeeResult<Vec<Employee>> {
        let term = match term.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return Ok(Vec::new()),
        };

        let employees = self.repository.search(term).await?;
        WorkforceMetrics::record_employee_query("search", employees.len());
        Ok(employees)
    }

    /// Employee count per department
    pub async fn department_headcount(&self) -> EmployeeResult<Vec<DepartmentHeadCount>> {
        let counts = self.repository.headcount().await?;
        WorkforceMetrics::record_employee_query("headcount", counts.len());
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryEmployeeRepository, MockEmployeeRepository};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn employee(id: i32, name: &str, department: Option<&str>, job_title: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            department: department.map(str::to_string),
            job_title: job_title.to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            category: "Full-Time".to_string(),
            gender: "F".to_string(),
            email: format!("{}@example.com", id),
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, "Ada", Some("Eng"), "Engineer"),
            employee(2, "Brian", Some("Eng"), "Senior Engineer"),
            employee(3, "Cleo", None, "Recruiter"),
            employee(4, "Dana", Some("HR"), "Engineer"),
        ]
    }

    #[tokio::test]
    async fn test_search_blank_terms_skip_repository() {
        let mut mock_repo = MockEmployeeRepository::new();
        mock_repo.expect_search().never();

        let service = EmployeeService::new(mock_repo);

        for term in [None, Some(""), Some("   ")] {
            let result = service.search_employees(term).await.unwrap();
            assert!(result.is_empty(), "term {:?} should yield nothing", term);
        }
    }

    #[tokio::test]
    async fn test_search_trims_and_lowercases_term() {
        let mut mock_repo = MockEmployeeRepository::new();
        mock_repo
            .expect_search()
            .with(eq("engineer".to_string()))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = EmployeeService::new(mock_repo);
        service.search_employees(Some("  ENGINEER ")).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::with_employees(staff()));

        let upper = service.search_employees(Some("ENGINEER")).await.unwrap();
        let lower = service.search_employees(Some("engineer")).await.unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 3);
    }

    #[tokio::test]
    async fn test_list_filters_are_combined_with_and() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::with_employees(staff()));

        let filter = EmployeeFilter {
            department: Some(" Eng ".to_string()),
            job_title: Some("Engineer".to_string()),
            employee_id: None,
        };
        let result = service.list_employees(filter).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[tokio::test]
    async fn test_list_without_match_is_empty() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::with_employees(staff()));

        let filter = EmployeeFilter {
            employee_id: Some(42),
            ..Default::default()
        };
        assert!(service.list_employees(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut mock_repo = MockEmployeeRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(9))
            .returning(|_| Ok(None));

        let service = EmployeeService::new(mock_repo);
        let result = service.get_employee(9).await;

        assert!(matches!(result, Err(EmployeeError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_bulk_lookup_with_no_ids_skips_repository() {
        let mut mock_repo = MockEmployeeRepository::new();
        mock_repo.expect_get_by_ids().never();

        let service = EmployeeService::new(mock_repo);
        assert!(service.get_employees_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_headcount_buckets_missing_department() {
        let service = EmployeeService::new(InMemoryEmployeeRepository::with_employees(vec![
            employee(1, "A", Some("Eng"), "Engineer"),
            employee(2, "B", Some("Eng"), "Engineer"),
            employee(3, "C", None, "Engineer"),
        ]));

        let mut counts = service.department_headcount().await.unwrap();
        counts.sort_by(|a, b| a.department.cmp(&b.department));

        assert_eq!(
            counts,
            vec![
                DepartmentHeadCount {
                    department: "Eng".to_string(),
                    count: 2
                },
                DepartmentHeadCount {
                    department: "Undefined".to_string(),
                    count: 1
                },
            ]
        );
    }
}
