use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

/// Bucket name for employees without a department.
pub const UNDEFINED_DEPARTMENT: &str = "Undefined";

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    /// `null` when the employee is not attached to a department
    pub department: Option<String>,
    pub job_title: String,
    pub start_date: NaiveDate,
    /// Employment category, e.g. "Full-Time"
    pub category: String,
    pub gender: String,
    pub email: String,
}

/// Employee listing filters; all provided filters must match.
///
/// Blank values are treated as absent, so `?department=&jobTitle=Engineer`
/// filters on job title only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeFilter {
    /// Exact, case-sensitive department name
    #[serde(default, deserialize_with = "blank_as_none")]
    pub department: Option<String>,
    /// Exact, case-sensitive job title
    #[serde(default, deserialize_with = "blank_as_none")]
    pub job_title: Option<String>,
    #[serde(default, rename = "employeeID", deserialize_with = "blank_as_none")]
    pub employee_id: Option<i32>,
}

impl EmployeeFilter {
    /// Trim string filters and drop the ones left empty.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            department: clean(self.department),
            job_title: clean(self.job_title),
            employee_id: self.employee_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.job_title.is_none() && self.employee_id.is_none()
    }

    /// True when `employee` satisfies every provided filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(ref department) = self.department {
            if employee.department.as_deref() != Some(department.as_str()) {
                return false;
            }
        }
        if let Some(ref job_title) = self.job_title {
            if &employee.job_title != job_title {
                return false;
            }
        }
        if let Some(id) = self.employee_id {
            if employee.id != id {
                return false;
            }
        }
        true
    }
}

/// Free-text search over name, department and job title
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring; blank terms return no results
    pub term: Option<String>,
}

/// Number of employees in one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentHeadCount {
    pub department: String,
    pub count: i64,
}

/// Deserialize a query value, mapping empty or all-whitespace input to `None`.
fn blank_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
