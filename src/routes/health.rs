use axum::response::Json;

use crate::models::HealthResponse;

// GET /health - Machine-readable liveness
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok_now())
}
