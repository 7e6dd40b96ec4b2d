use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Page number must be at least 1, got {0}")]
    InvalidPage(i64),

    #[error("Page size must be at least 1, got {0}")]
    InvalidPageSize(i64),

    #[error("Invalid student ID: {0}")]
    InvalidStudentId(String),

    #[error("Invalid faculty ID: {0}")]
    InvalidFacultyId(String),
}
