use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::dto::UploadAvatarRequest;
use crate::application::errors::AvatarError;
use crate::application::ports::{
    AvatarRepository, BlobStore, FileNameGenerator, StudentRepository,
};
use crate::domain::entities::NewAvatar;
use crate::domain::value_objects::{AvatarFileName, AvatarId};

/// Media type recorded when the client did not send one
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Use case: Upload an avatar for a student
///
/// The image is written to the blob store first and recorded in the database
/// second. A crash between the two leaves an unreferenced file behind, never a
/// record pointing at a missing file.
pub struct UploadAvatarUseCase {
    avatar_repo: Arc<dyn AvatarRepository>,
    student_repo: Arc<dyn StudentRepository>,
    blob_store: Arc<dyn BlobStore>,
    name_generator: Arc<dyn FileNameGenerator>,
}

impl UploadAvatarUseCase {
    pub fn new(
        avatar_repo: Arc<dyn AvatarRepository>,
        student_repo: Arc<dyn StudentRepository>,
        blob_store: Arc<dyn BlobStore>,
        name_generator: Arc<dyn FileNameGenerator>,
    ) -> Self {
        Self {
            avatar_repo,
            student_repo,
            blob_store,
            name_generator,
        }
    }

    /// Execute upload workflow, returning the ID of the new record
    pub async fn execute(
        &self,
        request: UploadAvatarRequest,
        data: Bytes,
    ) -> Result<AvatarId, AvatarError> {
        debug!(
            student_id = %request.student_id,
            file_name = ?request.original_file_name,
            content_type = ?request.content_type,
            size = data.len(),
            "uploadAvatar invoked"
        );

        // 1. Resolve owner before touching either store
        let student = self
            .student_repo
            .find_by_id(request.student_id)
            .await?
            .ok_or(AvatarError::StudentNotFound(request.student_id))?;

        // 2. Fresh name, original extension
        let file_name = AvatarFileName::compose(
            self.name_generator.generate_unique_name(),
            request.original_file_name.as_deref(),
        );

        // 3. Filesystem copy
        let file_path = self.blob_store.write(file_name.as_str(), &data).await?;

        // 4. Database copy, only once the file exists
        let media_type = request
            .content_type
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());
        let avatar = NewAvatar::new(student.id(), data, media_type, file_path);
        let saved = self.avatar_repo.save(&avatar).await?;

        info!(
            student_id = %student.id(),
            avatar_id = %saved.id(),
            path = %saved.file_path().display(),
            "Avatar stored"
        );

        Ok(saved.id())
    }
}
