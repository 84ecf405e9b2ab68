use domain_employees::{EmployeeService, PgEmployeeRepository};

pub fn service(state: &crate::state::AppState) -> EmployeeService<PgEmployeeRepository> {
    EmployeeService::new(PgEmployeeRepository::new(state.db.clone()))
}
