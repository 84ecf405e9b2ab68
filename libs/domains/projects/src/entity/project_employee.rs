use sea_orm::entity::prelude::*;

use crate::models::ProjectEmployee;

/// Assignment row; unique per (project_id, employee_id)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project_employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub employee_id: i32,
    pub employee_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProjectEmployee {
    fn from(model: Model) -> Self {
        Self {
            employee_id: model.employee_id,
            employee_name: model.employee_name,
        }
    }
}
