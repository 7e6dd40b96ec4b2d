use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::FacultyDto;
use crate::application::use_cases::FindFacultiesUseCase;
use crate::domain::value_objects::FacultyId;

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    color: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: String,
}

/// GET /faculties/{id}
#[utoipa::path(
    get,
    path = "/faculties/{id}",
    tag = "faculties",
    params(("id" = i64, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty found", body = FacultyDto),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Faculty not found")
    )
)]
pub async fn get_faculty_handler(
    State(use_case): State<Arc<FindFacultiesUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<FacultyDto>, ApiError> {
    let faculty_id = id
        .parse::<FacultyId>()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let faculty = use_case.execute_by_id(faculty_id).await?;

    Ok(Json(faculty))
}

/// GET /faculties?color=
#[utoipa::path(
    get,
    path = "/faculties",
    tag = "faculties",
    params(("color" = String, Query, description = "Exact faculty color")),
    responses(
        (status = 200, description = "Faculties with this color", body = [FacultyDto])
    )
)]
pub async fn faculties_by_color_handler(
    State(use_case): State<Arc<FindFacultiesUseCase>>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<Vec<FacultyDto>>, ApiError> {
    Ok(Json(use_case.execute_by_color(&query.color).await?))
}

/// GET /faculties/search?query=
/// Case-insensitive match against name or color
#[utoipa::path(
    get,
    path = "/faculties/search",
    tag = "faculties",
    params(("query" = String, Query, description = "Faculty name or color")),
    responses(
        (status = 200, description = "Matching faculties", body = [FacultyDto])
    )
)]
pub async fn search_faculties_handler(
    State(use_case): State<Arc<FindFacultiesUseCase>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<FacultyDto>>, ApiError> {
    Ok(Json(use_case.execute_search(&query.query).await?))
}
