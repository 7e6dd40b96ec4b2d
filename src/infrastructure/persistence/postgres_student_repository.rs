use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, StudentRepository};
use crate::domain::entities::Student;
use crate::domain::value_objects::{FacultyId, StudentId};
use crate::infrastructure::persistence::QueryBuilder;

pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        let sql = QueryBuilder::select(QueryBuilder::STUDENT_SELECT, "WHERE id = $1");

        let row = sqlx::query_as::<_, StudentRow>(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(StudentRow::into_domain))
    }

    async fn find_by_ids(&self, ids: &[StudentId]) -> Result<Vec<Student>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(StudentId::as_i64).collect();
        let sql = QueryBuilder::select(
            QueryBuilder::STUDENT_SELECT,
            "WHERE id = ANY($1) ORDER BY id",
        );

        let rows = sqlx::query_as::<_, StudentRow>(&sql)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StudentRow::into_domain).collect())
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    age: i32,
    faculty_id: Option<i64>,
}

impl StudentRow {
    fn into_domain(self) -> Student {
        Student::new(
            StudentId::new(self.id),
            self.name,
            self.age,
            self.faculty_id.map(FacultyId::new),
        )
    }
}
