use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    download_from_db_handler, download_from_fs_handler, faculties_by_color_handler,
    get_faculty_handler, health_handler, list_handler, readiness_handler,
    search_faculties_handler, upload_handler,
};
use crate::api::middleware::create_cors_layer;
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    DownloadAvatarUseCase, FindFacultiesUseCase, ListAvatarsUseCase, UploadAvatarUseCase,
};

/// Mount point of the avatar endpoints; also the base of generated retrieval URLs
pub const AVATARS_BASE_PATH: &str = "/avatars";

// Room for multipart boundaries and the studentId field on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub upload_use_case: Arc<UploadAvatarUseCase>,
    pub download_use_case: Arc<DownloadAvatarUseCase>,
    pub list_use_case: Arc<ListAvatarsUseCase>,
    pub faculty_use_case: Arc<FindFacultiesUseCase>,
    pub max_avatar_bytes: usize,
    pub allowed_origins: Vec<String>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let upload_state = Arc::clone(&state.upload_use_case);
    let download_state = Arc::clone(&state.download_use_case);
    let list_state = Arc::clone(&state.list_use_case);
    let faculty_state = Arc::clone(&state.faculty_use_case);
    let body_limit = state.max_avatar_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    let avatars_from_db = format!("{}/from-db", AVATARS_BASE_PATH);
    let avatars_from_fs = format!("{}/from-fs", AVATARS_BASE_PATH);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Avatars
        .route(
            AVATARS_BASE_PATH,
            post(upload_handler)
                .with_state(upload_state)
                .layer::<_, std::convert::Infallible>(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
        .route(AVATARS_BASE_PATH, get(list_handler).with_state(list_state))
        .route(
            &avatars_from_db,
            get(download_from_db_handler).with_state(Arc::clone(&download_state)),
        )
        .route(
            &avatars_from_fs,
            get(download_from_fs_handler).with_state(download_state),
        )
        // Faculties
        .route(
            "/faculties",
            get(faculties_by_color_handler).with_state(Arc::clone(&faculty_state)),
        )
        .route(
            "/faculties/search",
            get(search_faculties_handler).with_state(Arc::clone(&faculty_state)),
        )
        .route(
            "/faculties/{id}",
            get(get_faculty_handler).with_state(faculty_state),
        )
        .merge(swagger_ui())
        .layer(create_cors_layer(&state.allowed_origins))
}
