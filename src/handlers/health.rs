use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
pub async fn root() -> &'static str {
    "Hello from the APK API!"
}

/// GET /health
///
/// 503 when the database does not answer a ping.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { status: "ok" })),
        Err(e) => {
            error!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "unavailable" }),
            )
        }
    }
}
