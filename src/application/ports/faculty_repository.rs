use async_trait::async_trait;

use crate::domain::entities::Faculty;
use crate::domain::value_objects::FacultyId;
#[cfg(test)]
use mockall::{automock, predicate::*};

use super::RepositoryError;

/// Port for faculty queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    async fn find_by_id(&self, id: FacultyId) -> Result<Option<Faculty>, RepositoryError>;

    /// Exact color match
    async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, RepositoryError>;

    /// Faculties whose name equals `name` or whose color equals `color`,
    /// ignoring case
    async fn find_by_name_or_color(
        &self,
        name: &str,
        color: &str,
    ) -> Result<Vec<Faculty>, RepositoryError>;
}
