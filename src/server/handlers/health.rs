//! `GET /api/health` handler.

use axum::extract::State;
use axum::Json;

use super::super::types::{AppState, HealthResponse};

/// Liveness check; also reports whether scan history is persisted.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        scan_log: state.store.backend(),
    })
}
