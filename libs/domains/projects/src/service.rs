use chrono::Utc;
use domain_employees::{EmployeeRepository, EmployeeService};
use observability::{AssignmentOutcome, WorkforceMetrics};
use std::sync::Arc;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{
    AssignEmployee, CreateProject, NewProject, Project, ProjectEmployee, DEFAULT_STATUS,
};
use crate::repository::ProjectRepository;

/// Service layer for Project business logic
pub struct ProjectService<R: ProjectRepository, E: EmployeeRepository> {
    repository: Arc<R>,
    employees: EmployeeService<E>,
}

impl<R: ProjectRepository, E: EmployeeRepository> Clone for ProjectService<R, E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            employees: self.employees.clone(),
        }
    }
}

impl<R: ProjectRepository, E: EmployeeRepository> ProjectService<R, E> {
    pub fn new(repository: R, employees: EmployeeService<E>) -> Self {
        Self {
            repository: Arc::new(repository),
            employees,
        }
    }

    /// Create a project, assigning only the employee ids that resolve
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let employees: Vec<ProjectEmployee> = self
            .employees
            .get_employees_by_ids(&input.employee_ids)
            .await?
            .into_iter()
            .map(|e| ProjectEmployee {
                employee_id: e.id,
                employee_name: e.name,
            })
            .collect();

        if employees.len() < input.employee_ids.len() {
            tracing::debug!(
                requested = input.employee_ids.len(),
                resolved = employees.len(),
                "Skipping unknown or duplicate employee ids"
            );
        }

        let status = input
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        let project = self
            .repository
            .create(NewProject {
                name: input.name.trim().to_string(),
                status,
                required_skills: input.required_skills,
                start_date: input.start_date,
                end_date: input.end_date,
                employees,
            })
            .await?;

        WorkforceMetrics::record_project_created(project.employees.len());
        Ok(project)
    }

    /// Get a project with its assignments
    pub async fn get_project(&self, id: i32) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    pub async fn list_projects(&self) -> ProjectResult<Vec<Project>> {
        self.repository.list().await
    }

    /// Projects whose start date is after the current instant
    pub async fn upcoming_projects(&self) -> ProjectResult<Vec<Project>> {
        self.repository.upcoming(Utc::now()).await
    }

    /// Assign an employee to a project.
    ///
    /// The employee id is taken as given; the name is stored as a snapshot.
    pub async fn assign_employee(&self, input: AssignEmployee) -> ProjectResult<()> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let result = self
            .repository
            .assign(
                input.project_id,
                ProjectEmployee {
                    employee_id: input.employee_id,
                    employee_name: input.employee_name.trim().to_string(),
                },
            )
            .await;

        let outcome = match &result {
            Ok(()) => AssignmentOutcome::Assigned,
            Err(ProjectError::AlreadyAssigned { .. }) => AssignmentOutcome::AlreadyAssigned,
            Err(ProjectError::NotFound(_)) => AssignmentOutcome::ProjectNotFound,
            Err(_) => AssignmentOutcome::Failed,
        };
        WorkforceMetrics::record_assignment(outcome);

        result
    }
}
