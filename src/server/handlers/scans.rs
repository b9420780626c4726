//! `GET /api/scans` handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use super::super::types::{AppState, ErrorResponse, ScansQuery};
use crate::config::{DEFAULT_RECENT_SCANS_LIMIT, MAX_RECENT_SCANS_LIMIT};

/// Lists recent scans, newest first.
pub async fn scans_handler(
    State(state): State<AppState>,
    query: Result<Query<ScansQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        let body = ErrorResponse {
            message: "limit must be a non-negative integer".to_string(),
            field: Some("limit".to_string()),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_SCANS_LIMIT)
        .min(MAX_RECENT_SCANS_LIMIT);

    match state.store.list_recent_scans(limit).await {
        Ok(scans) => Json(scans).into_response(),
        Err(e) => {
            error!("Failed to list scans: {e}");
            let body = ErrorResponse {
                message: "Failed to load scan history.".to_string(),
                field: None,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
