use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{NewProject, Project, ProjectEmployee};

/// Repository trait for Project persistence.
///
/// Every returned [`Project`] carries its full assignment list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a project and its initial assignments atomically
    async fn create(&self, input: NewProject) -> ProjectResult<Project>;

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>>;

    /// All projects, ascending by id
    async fn list(&self) -> ProjectResult<Vec<Project>>;

    /// Projects starting strictly after `now`
    async fn upcoming(&self, now: DateTime<Utc>) -> ProjectResult<Vec<Project>>;

    /// Append `employee` to the project's assignments.
    ///
    /// Fails with `NotFound` for an unknown project and `AlreadyAssigned`
    /// when the employee is already on it; neither case writes anything.
    async fn assign(&self, project_id: i32, employee: ProjectEmployee) -> ProjectResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    projects: BTreeMap<i32, Project>,
    last_id: i32,
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: NewProject) -> ProjectResult<Project> {
        let mut store = self.store.write().await;

        if store.projects.values().any(|p| p.name == input.name) {
            return Err(ProjectError::DuplicateName(input.name));
        }

        store.last_id += 1;
        let project = input.into_project(store.last_id);
        store.projects.insert(project.id, project.clone());

        tracing::info!(project_id = project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let store = self.store.read().await;
        Ok(store.projects.get(&id).cloned())
    }

    async fn list(&self) -> ProjectResult<Vec<Project>> {
        let store = self.store.read().await;
        Ok(store.projects.values().cloned().collect())
    }

    async fn upcoming(&self, now: DateTime<Utc>) -> ProjectResult<Vec<Project>> {
        let store = self.store.read().await;
        Ok(store
            .projects
            .values()
            .filter(|p| p.start_date > now)
            .cloned()
            .collect())
    }

    async fn assign(&self, project_id: i32, employee: ProjectEmployee) -> ProjectResult<()> {
        // Write lock spans the check and the append.
        let mut store = self.store.write().await;

        let project = store
            .projects
            .get_mut(&project_id)
            .ok_or(ProjectError::NotFound(project_id))?;

        if project.has_employee(employee.employee_id) {
            return Err(ProjectError::AlreadyAssigned {
                project_id,
                employee_id: employee.employee_id,
            });
        }

        tracing::info!(
            project_id,
            employee_id = employee.employee_id,
            "Assigned employee to project"
        );
        project.employees.push(employee);
        Ok(())
    }
}
