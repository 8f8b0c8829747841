use axum::Json;

use crate::message::{HealthResponse, RootResponse};

/// GET /
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// GET /health, for container liveness probes.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
