use std::sync::Arc;
use tracing::debug;

use crate::application::dto::FacultyDto;
use crate::application::errors::FacultyError;
use crate::application::ports::FacultyRepository;
use crate::domain::value_objects::FacultyId;

/// Use case: Look up faculties
pub struct FindFacultiesUseCase {
    faculty_repo: Arc<dyn FacultyRepository>,
}

impl FindFacultiesUseCase {
    pub fn new(faculty_repo: Arc<dyn FacultyRepository>) -> Self {
        Self { faculty_repo }
    }

    pub async fn execute_by_id(&self, id: FacultyId) -> Result<FacultyDto, FacultyError> {
        debug!(%id, "findFaculty invoked");

        self.faculty_repo
            .find_by_id(id)
            .await?
            .map(FacultyDto::from)
            .ok_or(FacultyError::NotFound(id))
    }

    pub async fn execute_by_color(&self, color: &str) -> Result<Vec<FacultyDto>, FacultyError> {
        debug!(color, "findByColor invoked");

        let faculties = self.faculty_repo.find_by_color(color).await?;
        Ok(faculties.into_iter().map(FacultyDto::from).collect())
    }

    /// Match `query` against name or color, ignoring case
    pub async fn execute_search(&self, query: &str) -> Result<Vec<FacultyDto>, FacultyError> {
        debug!(query, "findByNameOrColor invoked");

        let faculties = self.faculty_repo.find_by_name_or_color(query, query).await?;
        Ok(faculties.into_iter().map(FacultyDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFacultyRepository;
    use crate::domain::entities::Faculty;

    fn gryffindor() -> Faculty {
        Faculty::new(FacultyId::new(1), "Gryffindor", "red")
    }

    #[tokio::test]
    async fn test_find_by_id_happy_path() {
        let mut mock_repo = MockFacultyRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(gryffindor())));

        let use_case = FindFacultiesUseCase::new(Arc::new(mock_repo));

        let dto = use_case.execute_by_id(FacultyId::new(1)).await.unwrap();

        assert_eq!(dto.name, "Gryffindor");
        assert_eq!(dto.color, "red");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut mock_repo = MockFacultyRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = FindFacultiesUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute_by_id(FacultyId::new(42)).await;

        assert!(matches!(result, Err(FacultyError::NotFound(id)) if id == FacultyId::new(42)));
    }

    #[tokio::test]
    async fn test_find_by_color_passes_color_through() {
        let mut mock_repo = MockFacultyRepository::new();
        mock_repo
            .expect_find_by_color()
            .withf(|color| color == "red")
            .times(1)
            .returning(|_| Ok(vec![gryffindor()]));

        let use_case = FindFacultiesUseCase::new(Arc::new(mock_repo));

        let dtos = use_case.execute_by_color("red").await.unwrap();

        assert_eq!(dtos.len(), 1);
    }

    #[tokio::test]
    async fn test_search_uses_query_for_name_and_color() {
        let mut mock_repo = MockFacultyRepository::new();
        mock_repo
            .expect_find_by_name_or_color()
            .withf(|name, color| name == "RED" && color == "RED")
            .times(1)
            .returning(|_, _| Ok(vec![gryffindor()]));

        let use_case = FindFacultiesUseCase::new(Arc::new(mock_repo));

        let dtos = use_case.execute_search("RED").await.unwrap();

        assert_eq!(dtos[0].id, 1);
    }
}
