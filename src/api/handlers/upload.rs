use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::errors::ApiError;
use crate::application::dto::UploadAvatarRequest;
use crate::application::use_cases::UploadAvatarUseCase;
use crate::domain::value_objects::StudentId;

const STUDENT_ID_FIELD: &str = "studentId";
const FILE_FIELDS: [&str; 2] = ["avatar", "file"];

/// Multipart form accepted by the upload endpoint.
///
/// Only describes the form in the OpenAPI document; the handler reads the
/// parts directly from [`Multipart`].
#[derive(ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAvatarForm {
    pub student_id: i64,
    /// Image file; its extension and content type are kept
    #[schema(value_type = String, format = Binary)]
    pub avatar: Vec<u8>,
}

struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /avatars
/// Upload an avatar for a student
#[utoipa::path(
    post,
    path = "/avatars",
    tag = "avatars",
    request_body(content = UploadAvatarForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored"),
        (status = 400, description = "Malformed form or file could not be written"),
        (status = 404, description = "Student not found"),
        (status = 413, description = "Avatar exceeds the upload limit"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_handler(
    State(use_case): State<Arc<UploadAvatarUseCase>>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let mut student_id: Option<StudentId> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == STUDENT_ID_FIELD {
            let text = field.text().await?;
            let id = text
                .parse::<StudentId>()
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            student_id = Some(id);
        } else if FILE_FIELDS.contains(&name.as_str()) {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;
            file = Some(UploadedFile {
                file_name,
                content_type,
                data,
            });
        } else {
            debug!("Ignoring unexpected multipart field: {}", name);
        }
    }

    let student_id = student_id
        .ok_or_else(|| ApiError::bad_request(format!("Missing form field: {}", STUDENT_ID_FIELD)))?;
    let file = file.ok_or_else(|| ApiError::bad_request("Missing avatar file"))?;

    let request = UploadAvatarRequest {
        student_id,
        original_file_name: file.file_name,
        content_type: file.content_type,
    };

    use_case.execute(request, file.data).await?;

    Ok(StatusCode::OK)
}
