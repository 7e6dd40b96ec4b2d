use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::AvatarContent;
use crate::application::use_cases::{AvatarSource, DownloadAvatarUseCase};
use crate::domain::value_objects::StudentId;

#[derive(Debug, Deserialize)]
pub struct AvatarQuery {
    #[serde(rename = "studentId")]
    student_id: StudentId,
}

/// GET /avatars/from-db?studentId=
/// Serve the copy stored in the avatar record
#[utoipa::path(
    get,
    path = "/avatars/from-db",
    tag = "avatars",
    params(("studentId" = i64, Query, description = "Owner of the avatar")),
    responses(
        (status = 200, description = "Raw image bytes with the stored media type"),
        (status = 404, description = "No avatar for this student")
    )
)]
pub async fn download_from_db_handler(
    State(use_case): State<Arc<DownloadAvatarUseCase>>,
    Query(query): Query<AvatarQuery>,
) -> Result<Response, ApiError> {
    let content = use_case
        .execute(query.student_id, AvatarSource::Database)
        .await?;
    avatar_response(content)
}

/// GET /avatars/from-fs?studentId=
/// Serve the copy stored on disk
#[utoipa::path(
    get,
    path = "/avatars/from-fs",
    tag = "avatars",
    params(("studentId" = i64, Query, description = "Owner of the avatar")),
    responses(
        (status = 200, description = "Raw image bytes with the stored media type"),
        (status = 400, description = "Avatar file could not be read"),
        (status = 404, description = "No avatar for this student")
    )
)]
pub async fn download_from_fs_handler(
    State(use_case): State<Arc<DownloadAvatarUseCase>>,
    Query(query): Query<AvatarQuery>,
) -> Result<Response, ApiError> {
    let content = use_case
        .execute(query.student_id, AvatarSource::Filesystem)
        .await?;
    avatar_response(content)
}

fn avatar_response(content: AvatarContent) -> Result<Response, ApiError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content.media_type)
        .header(header::CONTENT_LENGTH, content.data.len())
        .body(Body::from(content.data))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}
