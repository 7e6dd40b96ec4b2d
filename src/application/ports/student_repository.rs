use async_trait::async_trait;

use crate::domain::entities::Student;
use crate::domain::value_objects::StudentId;
#[cfg(test)]
use mockall::{automock, predicate::*};

use super::RepositoryError;

/// Port for looking up students
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError>;

    /// Batch lookup; IDs without a matching student are skipped
    async fn find_by_ids(&self, ids: &[StudentId]) -> Result<Vec<Student>, RepositoryError>;
}
