use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AvatarId, StudentId};

/// Avatar that has been written to the blob store but not yet recorded.
///
/// `file_size` is always derived from `data`, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAvatar {
    student_id: StudentId,
    data: Bytes,
    media_type: String,
    file_path: PathBuf,
}

impl NewAvatar {
    pub fn new(
        student_id: StudentId,
        data: Bytes,
        media_type: impl Into<String>,
        file_path: PathBuf,
    ) -> Self {
        Self {
            student_id,
            data,
            media_type: media_type.into(),
            file_path,
        }
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn file_size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Attach the identifier assigned by the record store
    pub fn into_avatar(self, id: AvatarId, created_at: DateTime<Utc>) -> Avatar {
        let file_size = self.file_size();
        Avatar {
            id,
            student_id: self.student_id,
            data: self.data,
            media_type: self.media_type,
            file_size,
            file_path: self.file_path,
            created_at,
        }
    }
}

/// Persisted avatar record
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    id: AvatarId,
    student_id: StudentId,
    data: Bytes,
    media_type: String,
    file_size: u64,
    file_path: PathBuf,
    created_at: DateTime<Utc>,
}

impl Avatar {
    /// Reconstruct from storage
    pub fn reconstruct(
        id: AvatarId,
        student_id: StudentId,
        data: Bytes,
        media_type: String,
        file_size: u64,
        file_path: PathBuf,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_id,
            data,
            media_type,
            file_size,
            file_path,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> AvatarId {
        self.id
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_new_avatar() -> NewAvatar {
        NewAvatar::new(
            StudentId::new(7),
            Bytes::from_static(&[0x01, 0x02, 0x03]),
            "image/png",
            PathBuf::from("/tmp/avatars/abc.png"),
        )
    }

    #[test]
    fn test_new_avatar_size_matches_payload() {
        let avatar = create_new_avatar();
        assert_eq!(avatar.file_size(), 3);
    }

    #[test]
    fn test_into_avatar_keeps_fields() {
        let created_at = Utc::now();
        let avatar = create_new_avatar().into_avatar(AvatarId::new(1), created_at);

        assert_eq!(avatar.id(), AvatarId::new(1));
        assert_eq!(avatar.student_id(), StudentId::new(7));
        assert_eq!(avatar.data().as_ref(), &[0x01, 0x02, 0x03]);
        assert_eq!(avatar.media_type(), "image/png");
        assert_eq!(avatar.file_size(), 3);
        assert_eq!(avatar.file_path(), Path::new("/tmp/avatars/abc.png"));
        assert_eq!(avatar.created_at(), created_at);
    }

    #[test]
    fn test_empty_payload_has_zero_size() {
        let avatar = NewAvatar::new(
            StudentId::new(1),
            Bytes::new(),
            "application/octet-stream",
            PathBuf::from("empty"),
        );
        assert_eq!(avatar.file_size(), 0);
    }
}
