use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_query;
use crate::application::dto::AvatarDto;
use crate::application::use_cases::ListAvatarsUseCase;

#[derive(Debug, Deserialize, Validate)]
pub struct ListQuery {
    /// 1-based page number
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    page: i64,
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    size: i64,
}

/// GET /avatars?page=&size=
/// List avatars, oldest first
#[utoipa::path(
    get,
    path = "/avatars",
    tag = "avatars",
    params(
        ("page" = i64, Query, description = "1-based page number"),
        ("size" = i64, Query, description = "Avatars per page")
    ),
    responses(
        (status = 200, description = "Avatars on the requested page", body = [AvatarDto]),
        (status = 400, description = "Invalid page or size"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListAvatarsUseCase>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AvatarDto>>, ApiError> {
    validate_query(&query)?;

    let avatars = use_case.execute(query.page, query.size).await?;

    Ok(Json(avatars))
}
