//! Error types shared by the use cases
//!
//! Not-found variants carry the ID that was looked up so the HTTP layer can
//! render the same message the service has always returned.

use thiserror::Error;

use crate::application::ports::{RepositoryError, StorageError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{FacultyId, StudentId};

/// Error type for avatar use cases (upload, download, list)
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Student with id: {0} not found!")]
    StudentNotFound(StudentId),

    #[error("Avatar for student with id: {0} not found!")]
    AvatarNotFound(StudentId),

    /// Filesystem failure while writing or reading the blob copy
    #[error("Avatar processing failed: {0}")]
    Processing(#[from] StorageError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<DomainError> for AvatarError {
    fn from(err: DomainError) -> Self {
        AvatarError::InvalidRequest(err.to_string())
    }
}

/// Error type for faculty queries
#[derive(Debug, Error)]
pub enum FacultyError {
    #[error("Faculty with id: {0} not found!")]
    NotFound(FacultyId),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
