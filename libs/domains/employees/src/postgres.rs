use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::{EmployeeError, EmployeeResult},
    models::{DepartmentHeadCount, Employee, EmployeeFilter},
    repository::{merge_headcounts, EmployeeRepository},
};

#[derive(Debug, FromQueryResult)]
struct DepartmentCountRow {
    department: Option<String>,
    count: i64,
}

/// Escape LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list(&self, filter: EmployeeFilter) -> EmployeeResult<Vec<Employee>> {
        let mut query = entity::Entity::find();

        if let Some(department) = filter.department {
            query = query.filter(entity::Column::Department.eq(department));
        }

        if let Some(job_title) = filter.job_title {
            query = query.filter(entity::Column::JobTitle.eq(job_title));
        }

        if let Some(id) = filter.employee_id {
            query = query.filter(entity::Column::Id.eq(id));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_ids(&self, mut ids: Vec<i32>) -> EmployeeResult<Vec<Employee>> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::Id.is_in(ids))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, term: String) -> EmployeeResult<Vec<Employee>> {
        let pattern = like_pattern(&term);
        let lower_like = |column: entity::Column| {
            Expr::expr(Func::lower(Expr::col(column)))
                .like(LikeExpr::new(pattern.clone()).escape('\\'))
        };

        let models = entity::Entity::find()
            .filter(
                Condition::any()
                    .add(lower_like(entity::Column::Name))
                    .add(lower_like(entity::Column::Department))
                    .add(lower_like(entity::Column::JobTitle)),
            )
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn headcount(&self) -> EmployeeResult<Vec<DepartmentHeadCount>> {
        let rows = entity::Entity::find()
            .select_only()
            .column(entity::Column::Department)
            .column_as(entity::Column::Id.count(), "count")
            .group_by(entity::Column::Department)
            .into_model::<DepartmentCountRow>()
            .all(self.base.db())
            .await?;

        Ok(merge_headcounts(
            rows.into_iter().map(|row| (row.department, row.count)),
        ))
    }
}
