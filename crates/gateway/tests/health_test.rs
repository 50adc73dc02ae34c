mod support;

use axum::http::{Method, StatusCode};

use support::*;

#[tokio::test]
async fn health_reports_unhealthy_without_a_connection() {
    let (status, body) = send(untouched_app(), request(Method::GET, "/health", None)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["error"], "database not connected");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(
        untouched_app(),
        request(Method::GET, "/api-docs/openapi.json", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/coupons/active"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
    assert!(body["components"]["schemas"]["HealthResponse"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response_status = send(untouched_app(), request(Method::GET, "/orders", None))
        .await
        .0;

    assert_eq!(response_status, StatusCode::NOT_FOUND);
}
