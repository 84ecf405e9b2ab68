use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::EmployeeResult;
use crate::models::{DepartmentHeadCount, Employee, EmployeeFilter, UNDEFINED_DEPARTMENT};

/// Repository trait for Employee reads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Employees matching every provided filter, ascending by id.
    ///
    /// Filters arrive normalized: no blank strings.
    async fn list(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>>;

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>>;

    /// The subset of `ids` that exist; unknown ids are dropped.
    async fn get_by_ids(&self, ids: Vec<i32>) -> EmployeeResult<Vec<Employee>>;

    /// Employees whose name, department or job title contains `term`.
    ///
    /// `term` is already trimmed, lower-cased and non-empty.
    async fn search(&self, term: String) -> EmployeeResult<Vec<Employee>>;

    /// Employee count per department, with nulls under [`UNDEFINED_DEPARTMENT`].
    async fn headcount(&self) -> EmployeeResult<Vec<DepartmentHeadCount>>;
}

/// Fold raw `(department, count)` groups into headcount records.
///
/// A stored department literally named "Undefined" shares the bucket with
/// null departments.
pub(crate) fn merge_headcounts<I>(groups: I) -> Vec<DepartmentHeadCount>
where
    I: IntoIterator<Item = (Option<String>, i64)>,
{
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
    for (department, count) in groups {
        let key = department.unwrap_or_else(|| UNDEFINED_DEPARTMENT.to_string());
        *buckets.entry(key).or_default() += count;
    }

    buckets
        .into_iter()
        .map(|(department, count)| DepartmentHeadCount { department, count })
        .collect()
}

/// In-memory implementation of EmployeeRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<i32, Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `employees`, keyed by their ids.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let map = employees.into_iter().map(|e| (e.id, e)).collect();
        Self {
            employees: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).cloned())
    }

    async fn get_by_ids(&self, ids: Vec<i32>) -> EmployeeResult<Vec<Employee>> {
        let wanted: BTreeSet<i32> = ids.into_iter().collect();
        let employees = self.employees.read().await;
        Ok(wanted
            .iter()
            .filter_map(|id| employees.get(id).cloned())
            .collect())
    }

    async fn search(&self, term: String) -> EmployeeResult<Vec<Employee>> {
        let contains = |field: &str| field.to_lowercase().contains(&term);

        let employees = self.employees.read().await;
        Ok(employees
            .values()
            .filter(|e| {
                contains(&e.name)
                    || e.department.as_deref().is_some_and(contains)
                    || contains(&e.job_title)
            })
            .cloned()
            .collect())
    }

    async fn headcount(&self) -> EmployeeResult<Vec<DepartmentHeadCount>> {
        let employees = self.employees.read().await;
        Ok(merge_headcounts(
            employees.values().map(|e| (e.department.clone(), 1)),
        ))
    }
}
