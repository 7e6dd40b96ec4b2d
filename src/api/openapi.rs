use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::api::handlers::upload::UploadAvatarForm;
use crate::application::dto::{AvatarDto, FacultyDto};

/// OpenAPI specification for the school registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Registry API",
        version = "1.0.0",
        description = "Student avatars stored on disk and in the database, plus faculty lookups"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::download::download_from_db_handler,
        crate::api::handlers::download::download_from_fs_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::faculties::get_faculty_handler,
        crate::api::handlers::faculties::faculties_by_color_handler,
        crate::api::handlers::faculties::search_faculties_handler,
    ),
    components(
        schemas(
            AvatarDto,
            FacultyDto,
            UploadAvatarForm,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "avatars", description = "Avatar upload and retrieval"),
        (name = "faculties", description = "Faculty lookups")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_avatar_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/avatars"));
        assert!(doc.paths.paths.contains_key("/avatars/from-db"));
        assert!(doc.paths.paths.contains_key("/avatars/from-fs"));
        assert!(doc.paths.paths.contains_key("/faculties/{id}"));
    }
}
