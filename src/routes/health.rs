// ============================================================================
// Health Routes
// ============================================================================

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health
/// Liveness probe; the service has no hard dependency to check because the
/// cache fails open
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
