mod download_avatar;
mod find_faculties;
mod list_avatars;
mod upload_avatar;

pub use download_avatar::{AvatarSource, DownloadAvatarUseCase};
pub use find_faculties::FindFacultiesUseCase;
pub use list_avatars::ListAvatarsUseCase;
pub use upload_avatar::{UploadAvatarUseCase, DEFAULT_MEDIA_TYPE};
