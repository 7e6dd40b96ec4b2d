use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Avatar, NewAvatar};
use crate::domain::value_objects::StudentId;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for avatar record persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvatarRepository: Send + Sync {
    /// Insert a new record and return it with its assigned ID
    async fn save(&self, avatar: &NewAvatar) -> Result<Avatar, RepositoryError>;

    /// Find the avatar owned by a student.
    ///
    /// Several records may exist for one student; the most recently created
    /// one is returned.
    async fn find_by_student(&self, student_id: StudentId)
        -> Result<Option<Avatar>, RepositoryError>;

    /// One page of records in insertion order
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Avatar>, RepositoryError>;
}
