use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{FacultyRepository, RepositoryError};
use crate::domain::entities::Faculty;
use crate::domain::value_objects::FacultyId;
use crate::infrastructure::persistence::QueryBuilder;

pub struct PostgresFacultyRepository {
    pool: PgPool,
}

impl PostgresFacultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacultyRepository for PostgresFacultyRepository {
    async fn find_by_id(&self, id: FacultyId) -> Result<Option<Faculty>, RepositoryError> {
        let sql = QueryBuilder::select(QueryBuilder::FACULTY_SELECT, "WHERE id = $1");

        let row = sqlx::query_as::<_, FacultyRow>(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(FacultyRow::into_domain))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, RepositoryError> {
        let sql = QueryBuilder::select(
            QueryBuilder::FACULTY_SELECT,
            "WHERE color = $1 ORDER BY id",
        );

        let rows = sqlx::query_as::<_, FacultyRow>(&sql)
            .bind(color)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FacultyRow::into_domain).collect())
    }

    async fn find_by_name_or_color(
        &self,
        name: &str,
        color: &str,
    ) -> Result<Vec<Faculty>, RepositoryError> {
        let sql = QueryBuilder::select(
            QueryBuilder::FACULTY_SELECT,
            "WHERE LOWER(name) = LOWER($1) OR LOWER(color) = LOWER($2) ORDER BY id",
        );

        let rows = sqlx::query_as::<_, FacultyRow>(&sql)
            .bind(name)
            .bind(color)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FacultyRow::into_domain).collect())
    }
}

#[derive(sqlx::FromRow)]
struct FacultyRow {
    id: i64,
    name: String,
    color: String,
}

impl FacultyRow {
    fn into_domain(self) -> Faculty {
        Faculty::new(FacultyId::new(self.id), self.name, self.color)
    }
}
