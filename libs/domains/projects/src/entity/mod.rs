//! Sea-ORM entities for `projects` and `project_employees`.

pub mod project;
pub mod project_employee;
