use crate::application::dto::AvatarDto;
use crate::domain::entities::{Avatar, Student};

/// Builds public descriptors for stored avatars.
///
/// Host, port and base path are fixed when the mapper is created; every URL
/// it emits points at the `from-db` download endpoint.
#[derive(Debug, Clone)]
pub struct AvatarMapper {
    download_base: String,
}

impl AvatarMapper {
    pub fn new(host: &str, port: u16, base_path: &str) -> Self {
        let base_path = base_path.trim_matches('/');
        let download_base = if base_path.is_empty() {
            format!("http://{}:{}/from-db", host, port)
        } else {
            format!("http://{}:{}/{}/from-db", host, port, base_path)
        };
        Self { download_base }
    }

    /// `owner` must be the student referenced by `avatar`
    pub fn to_dto(&self, avatar: &Avatar, owner: &Student) -> AvatarDto {
        debug_assert_eq!(avatar.student_id(), owner.id());
        AvatarDto {
            id: avatar.id().as_i64(),
            student_name: owner.name().to_string(),
            url: self.download_url(owner),
        }
    }

    fn download_url(&self, owner: &Student) -> String {
        format!("{}?studentId={}", self.download_base, owner.id())
    }
}
