use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::dto::AvatarContent;
use crate::application::errors::AvatarError;
use crate::application::ports::{AvatarRepository, BlobStore};
use crate::domain::entities::Avatar;
use crate::domain::value_objects::StudentId;

/// Which copy of the image to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSource {
    /// Payload stored in the avatar record
    Database,
    /// File the record's path points at
    Filesystem,
}

/// Use case: Download a student's avatar
pub struct DownloadAvatarUseCase {
    avatar_repo: Arc<dyn AvatarRepository>,
    blob_store: Arc<dyn BlobStore>,
}

impl DownloadAvatarUseCase {
    pub fn new(avatar_repo: Arc<dyn AvatarRepository>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self {
            avatar_repo,
            blob_store,
        }
    }

    pub async fn execute(
        &self,
        student_id: StudentId,
        source: AvatarSource,
    ) -> Result<AvatarContent, AvatarError> {
        match source {
            AvatarSource::Database => self.execute_from_db(student_id).await,
            AvatarSource::Filesystem => self.execute_from_fs(student_id).await,
        }
    }

    /// Serve the payload embedded in the record; never touches the filesystem
    pub async fn execute_from_db(&self, student_id: StudentId) -> Result<AvatarContent, AvatarError> {
        debug!(%student_id, "getAvatarFromDb invoked");

        let avatar = self.find_avatar(student_id).await?;
        Ok(AvatarContent {
            data: avatar.data().clone(),
            media_type: avatar.media_type().to_string(),
        })
    }

    /// Read the blob copy from disk
    pub async fn execute_from_fs(&self, student_id: StudentId) -> Result<AvatarContent, AvatarError> {
        debug!(%student_id, "getAvatarFromFs invoked");

        let avatar = self.find_avatar(student_id).await?;
        let data = self
            .blob_store
            .read(avatar.file_path())
            .await
            .map_err(|e| {
                warn!(
                    %student_id,
                    path = %avatar.file_path().display(),
                    "Avatar record exists but its file could not be read: {}",
                    e
                );
                AvatarError::Processing(e)
            })?;

        Ok(AvatarContent {
            data,
            media_type: avatar.media_type().to_string(),
        })
    }

    async fn find_avatar(&self, student_id: StudentId) -> Result<Avatar, AvatarError> {
        self.avatar_repo
            .find_by_student(student_id)
            .await?
            .ok_or(AvatarError::AvatarNotFound(student_id))
    }
}
