use domain_employees::{EmployeeService, PgEmployeeRepository};
use domain_projects::{PgProjectRepository, ProjectService};

/// Project service sharing the employee service used for id resolution.
pub fn service(
    state: &crate::state::AppState,
    employees: EmployeeService<PgEmployeeRepository>,
) -> ProjectService<PgProjectRepository, PgEmployeeRepository> {
    ProjectService::new(PgProjectRepository::new(state.db.clone()), employees)
}
