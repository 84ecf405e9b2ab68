use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Status given to projects created without one.
pub const DEFAULT_STATUS: &str = "Pending";

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_date_range(input: &CreateProject) -> Result<(), ValidationError> {
    if input.end_date < input.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("endDate must not be before startDate".into());
        return Err(err);
    }
    Ok(())
}

/// Employee assigned to a project, with the name captured at assignment time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEmployee {
    pub employee_id: i32,
    pub employee_name: String,
}

/// Project with its assignments, in assignment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    /// Unique project name
    pub name: String,
    pub status: String,
    pub required_skills: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub employees: Vec<ProjectEmployee>,
}

impl Project {
    pub fn has_employee(&self, employee_id: i32) -> bool {
        self.employees.iter().any(|e| e.employee_id == employee_id)
    }
}

/// Request body for creating a project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CreateProject {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    /// Defaults to "Pending"
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Employees to assign; unknown ids are ignored
    #[serde(default)]
    pub employee_ids: Vec<i32>,
}

/// Request body for assigning an employee to a project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignEmployee {
    pub project_id: i32,
    pub employee_id: i32,
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub employee_name: String,
}

/// Fully resolved project ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub status: String,
    pub required_skills: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub employees: Vec<ProjectEmployee>,
}

impl NewProject {
    pub fn into_project(self, id: i32) -> Project {
        Project {
            id,
            name: self.name,
            status: self.status,
            required_skills: self.required_skills,
            start_date: self.start_date,
            end_date: self.end_date,
            employees: self.employees,
        }
    }
}
