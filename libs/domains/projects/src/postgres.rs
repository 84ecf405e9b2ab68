use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::{is_unique_violation, BaseRepository};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    entity::{project, project_employee},
    error::{ProjectError, ProjectResult},
    models::{NewProject, Project, ProjectEmployee},
    repository::ProjectRepository,
};

#[derive(Clone)]
pub struct PgProjectRepository {
    base: BaseRepository<project::Entity>,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Attach assignments to `models` with one batched query.
    async fn with_employees<C: ConnectionTrait>(
        conn: &C,
        models: Vec<project::Model>,
    ) -> ProjectResult<Vec<Project>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let rows = project_employee::Entity::find()
            .filter(project_employee::Column::ProjectId.is_in(ids))
            .order_by_asc(project_employee::Column::Id)
            .all(conn)
            .await?;

        let mut by_project: HashMap<i32, Vec<ProjectEmployee>> = HashMap::new();
        for row in rows {
            by_project.entry(row.project_id).or_default().push(row.into());
        }

        Ok(models
            .into_iter()
            .map(|model| Project {
                id: model.id,
                required_skills: model.skills(),
                employees: by_project.remove(&model.id).unwrap_or_default(),
                name: model.name,
                status: model.status,
                start_date: model.start_date.into(),
                end_date: model.end_date.into(),
            })
            .collect())
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, input: NewProject) -> ProjectResult<Project> {
        let txn = self.base.db().begin().await?;

        let active_model: project::ActiveModel = (&input).into();
        let model = active_model.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                ProjectError::DuplicateName(input.name.clone())
            } else {
                ProjectError::Database(e)
            }
        })?;

        if !input.employees.is_empty() {
            let rows = input
                .employees
                .iter()
                .map(|e| project_employee::ActiveModel {
                    id: NotSet,
                    project_id: Set(model.id),
                    employee_id: Set(e.employee_id),
                    employee_name: Set(e.employee_name.clone()),
                });
            project_employee::Entity::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            project_id = model.id,
            employees = input.employees.len(),
            "Created project"
        );
        // Dates come back from RETURNING at the column's microsecond precision.
        Ok(Project {
            id: model.id,
            required_skills: model.skills(),
            employees: input.employees,
            name: model.name,
            status: model.status,
            start_date: model.start_date.into(),
            end_date: model.end_date.into(),
        })
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut projects = Self::with_employees(self.base.db(), vec![model]).await?;
        Ok(projects.pop())
    }

    async fn list(&self) -> ProjectResult<Vec<Project>> {
        let models = project::Entity::find()
            .order_by_asc(project::Column::Id)
            .all(self.base.db())
            .await?;

        Self::with_employees(self.base.db(), models).await
    }

    async fn upcoming(&self, now: DateTime<Utc>) -> ProjectResult<Vec<Project>> {
        let models = project::Entity::find()
            .filter(project::Column::StartDate.gt(now))
            .order_by_asc(project::Column::StartDate)
            .order_by_asc(project::Column::Id)
            .all(self.base.db())
            .await?;

        Self::with_employees(self.base.db(), models).await
    }

    async fn assign(&self, project_id: i32, employee: ProjectEmployee) -> ProjectResult<()> {
        let employee_id = employee.employee_id;
        let already_assigned = ProjectError::AlreadyAssigned {
            project_id,
            employee_id,
        };

        let txn = self.base.db().begin().await?;

        // SELECT ... FOR UPDATE serializes assignments to the same project.
        project::Entity::find_by_id(project_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ProjectError::NotFound(project_id))?;

        let existing = project_employee::Entity::find()
            .filter(project_employee::Column::ProjectId.eq(project_id))
            .filter(project_employee::Column::EmployeeId.eq(employee_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(already_assigned);
        }

        project_employee::ActiveModel {
            id: NotSet,
            project_id: Set(project_id),
            employee_id: Set(employee_id),
            employee_name: Set(employee.employee_name),
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ProjectError::AlreadyAssigned {
                    project_id,
                    employee_id,
                }
            } else {
                ProjectError::Database(e)
            }
        })?;

        txn.commit().await?;

        tracing::info!(project_id, employee_id, "Assigned employee to project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn project_model(id: i32) -> project::Model {
        let start = Utc.with_ymd_and_hms(2031, 1, 1, 9, 0, 0).unwrap();
        project::Model {
            id,
            name: format!("project-{}", id),
            status: "Pending".to_string(),
            required_skills: serde_json::json!(["rust", "sql"]),
            start_date: start.into(),
            end_date: (start + chrono::Duration::days(90)).into(),
        }
    }

    fn assignment(id: i32, project_id: i32, employee_id: i32) -> project_employee::Model {
        project_employee::Model {
            id,
            project_id,
            employee_id,
            employee_name: format!("Employee {}", employee_id),
        }
    }

    #[tokio::test]
    async fn test_list_batches_assignments() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(1), project_model(2)]])
            .append_query_results([vec![
                assignment(1, 2, 7),
                assignment(2, 1, 3),
                assignment(3, 2, 5),
            ]])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        let projects = repo.list().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].employees.len(), 1);
        let second: Vec<i32> = projects[1].employees.iter().map(|e| e.employee_id).collect();
        assert_eq!(second, vec![7, 5]);
        assert_eq!(projects[0].required_skills, vec!["rust", "sql"]);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_skips_assignment_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<project::Model>::new()])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_stored_timestamps() {
        let stored = project_model(4);
        let start = DateTime::<Utc>::from(stored.start_date) + chrono::Duration::nanoseconds(789);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        let created = repo
            .create(NewProject {
                name: stored.name.clone(),
                status: stored.status.clone(),
                required_skills: vec!["rust".to_string(), "sql".to_string()],
                start_date: start,
                end_date: start + chrono::Duration::days(90),
                employees: vec![],
            })
            .await
            .unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(created.start_date, DateTime::<Utc>::from(stored.start_date));
        assert_eq!(created.end_date, DateTime::<Utc>::from(stored.end_date));
        assert_eq!(created.start_date.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[tokio::test]
    async fn test_query_error_keeps_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        let result = repo.list().await;
        assert!(matches!(result, Err(ProjectError::Database(_))));
    }

    #[test]
    fn test_malformed_skills_column_reads_empty() {
        let mut model = project_model(1);
        model.required_skills = serde_json::json!("rust,sql");
        assert!(model.skills().is_empty());
    }
}
