use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use super::{body_json, router, Mocks};
use crate::api::handlers::health_handler;

#[tokio::test]
async fn test_health_handler() {
    let (status, body) = health_handler().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.0["status"], "healthy");
    assert_eq!(body.0["service"], "school_registry");
}

#[tokio::test]
async fn test_readiness_without_database_is_unavailable() {
    let response = router(Mocks::default())
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "not_ready");
}
