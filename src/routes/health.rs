use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Not ready while the selected email provider cannot be built, since every
/// submission would fail.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.dispatcher.service() {
        Ok(service) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "email_service": service})),
        ),
        Err(err) => {
            tracing::warn!(err = %err, "readiness check failed: email provider misconfigured");

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": err.to_string(),
                })),
            )
        }
    }
}
