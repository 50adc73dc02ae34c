//! Health check handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use mongodb::bson::doc;
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::extractors::DatabaseHandle;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - pings MongoDB.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database not connected or not answering", body = HealthResponse)
    )
)]
pub async fn health_check(DatabaseHandle(database): DatabaseHandle) -> Response {
    let Some(database) = database else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::unhealthy("database not connected")),
        )
            .into_response();
    };

    match database.run_command(doc! { "ping": 1 }).await {
        Ok(_) => (StatusCode::OK, Json(HealthResponse::healthy())).into_response(),
        Err(e) => {
            warn!("Health check ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy(e.to_string())),
            )
                .into_response()
        }
    }
}
