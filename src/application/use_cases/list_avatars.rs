use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use crate::application::dto::AvatarDto;
use crate::application::errors::AvatarError;
use crate::application::mapper::AvatarMapper;
use crate::application::ports::{AvatarRepository, StudentRepository};
use crate::domain::entities::Student;
use crate::domain::value_objects::{PageRequest, StudentId};

/// Use case: List avatars page by page
pub struct ListAvatarsUseCase {
    avatar_repo: Arc<dyn AvatarRepository>,
    student_repo: Arc<dyn StudentRepository>,
    mapper: AvatarMapper,
}

impl ListAvatarsUseCase {
    pub fn new(
        avatar_repo: Arc<dyn AvatarRepository>,
        student_repo: Arc<dyn StudentRepository>,
        mapper: AvatarMapper,
    ) -> Self {
        Self {
            avatar_repo,
            student_repo,
            mapper,
        }
    }

    /// `page` is one-based. A page past the end yields an empty list.
    pub async fn execute(&self, page: i64, size: i64) -> Result<Vec<AvatarDto>, AvatarError> {
        debug!(page, size, "getAvatars invoked");

        let request = PageRequest::new(page, size)?;

        let avatars = self
            .avatar_repo
            .find_page(request.limit(), request.offset())
            .await?;
        if avatars.is_empty() {
            return Ok(Vec::new());
        }

        // Resolve every owner on the page in one query
        let mut owner_ids: Vec<StudentId> = avatars.iter().map(|a| a.student_id()).collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let owners: HashMap<StudentId, Student> = self
            .student_repo
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|s| (s.id(), s))
            .collect();

        avatars
            .iter()
            .map(|avatar| -> Result<AvatarDto, AvatarError> {
                let owner = owners.get(&avatar.student_id()).ok_or_else(|| {
                    error!(
                        avatar_id = %avatar.id(),
                        student_id = %avatar.student_id(),
                        "Avatar references a student that does not exist"
                    );
                    AvatarError::StudentNotFound(avatar.student_id())
                })?;
                Ok(self.mapper.to_dto(avatar, owner))
            })
            .collect()
    }
}
