use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the employees table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub department: Option<String>,
    pub job_title: String,
    pub start_date: Date,
    pub category: String,
    pub gender: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Employee {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department: model.department,
            job_title: model.job_title,
            start_date: model.start_date,
            category: model.category,
            gender: model.gender,
            email: model.email,
        }
    }
}
