use async_trait::async_trait;
use bytes::Bytes;
use sqlx::PgPool;
use std::path::PathBuf;

use crate::application::ports::{AvatarRepository, RepositoryError};
use crate::domain::entities::{Avatar, NewAvatar};
use crate::domain::value_objects::{AvatarId, StudentId};
use crate::infrastructure::persistence::QueryBuilder;

pub struct PostgresAvatarRepository {
    pool: PgPool,
}

impl PostgresAvatarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvatarRepository for PostgresAvatarRepository {
    async fn save(&self, avatar: &NewAvatar) -> Result<Avatar, RepositoryError> {
        let file_path = avatar.file_path().to_str().ok_or_else(|| {
            RepositoryError::SerializationError(format!(
                "Avatar path is not valid UTF-8: {:?}",
                avatar.file_path()
            ))
        })?;
        let file_size = i64::try_from(avatar.file_size())
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let (id, created_at): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
            r#"
            INSERT INTO avatars (student_id, data, media_type, file_size, file_path)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(avatar.student_id().as_i64())
        .bind(&avatar.data()[..])
        .bind(avatar.media_type())
        .bind(file_size)
        .bind(file_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(avatar.clone().into_avatar(AvatarId::new(id), created_at))
    }

    async fn find_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<Avatar>, RepositoryError> {
        let sql = QueryBuilder::select(
            QueryBuilder::AVATAR_SELECT,
            "WHERE student_id = $1 ORDER BY id DESC LIMIT 1",
        );

        let row = sqlx::query_as::<_, AvatarRow>(&sql)
            .bind(student_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AvatarRow::into_domain).transpose()
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Avatar>, RepositoryError> {
        let sql = QueryBuilder::select(
            QueryBuilder::AVATAR_SELECT,
            "ORDER BY id ASC LIMIT $1 OFFSET $2",
        );

        let rows = sqlx::query_as::<_, AvatarRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(AvatarRow::into_domain).collect()
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct AvatarRow {
    id: i64,
    student_id: i64,
    data: Vec<u8>,
    media_type: String,
    file_size: i64,
    file_path: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl AvatarRow {
    fn into_domain(self) -> Result<Avatar, RepositoryError> {
        let file_size = u64::try_from(self.file_size).map_err(|_| {
            RepositoryError::SerializationError(format!(
                "Negative file_size {} for avatar {}",
                self.file_size, self.id
            ))
        })?;

        Ok(Avatar::reconstruct(
            AvatarId::new(self.id),
            StudentId::new(self.student_id),
            Bytes::from(self.data),
            self.media_type,
            file_size,
            PathBuf::from(self.file_path),
            self.created_at,
        ))
    }
}
