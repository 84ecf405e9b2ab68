use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::models::NewProject;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub status: String,
    /// JSON array of skill names
    pub required_skills: Json,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_employee::Entity")]
    ProjectEmployee,
}

impl Related<super::project_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectEmployee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Skills in stored order; a malformed column reads as no skills.
    pub fn skills(&self) -> Vec<String> {
        serde_json::from_value(self.required_skills.clone()).unwrap_or_else(|e| {
            tracing::warn!(
                project_id = self.id,
                error = %e,
                "Malformed required_skills column, reading as empty"
            );
            Vec::new()
        })
    }
}

impl From<&NewProject> for ActiveModel {
    fn from(input: &NewProject) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            status: Set(input.status.clone()),
            required_skills: Set(Json::from(input.required_skills.clone())),
            start_date: Set(input.start_date.into()),
            end_date: Set(input.end_date.into()),
        }
    }
}
