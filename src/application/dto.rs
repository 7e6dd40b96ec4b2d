use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::Faculty;
use crate::domain::value_objects::StudentId;

/// Public descriptor of a stored avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDto {
    pub id: i64,
    pub student_name: String,
    /// Where the image can be fetched from the database copy
    pub url: String,
}

/// Parameters of an avatar upload, minus the bytes themselves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAvatarRequest {
    pub student_id: StudentId,
    /// File name as sent by the client; only its extension is kept
    pub original_file_name: Option<String>,
    /// Content type as sent by the client; stored without validation
    pub content_type: Option<String>,
}

/// Image bytes plus the media type they were uploaded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarContent {
    pub data: Bytes,
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FacultyDto {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl From<Faculty> for FacultyDto {
    fn from(faculty: Faculty) -> Self {
        Self {
            id: faculty.id().as_i64(),
            name: faculty.name().to_string(),
            color: faculty.color().to_string(),
        }
    }
}
