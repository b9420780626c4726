//! Mapping of analysis failures onto HTTP responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use super::types::ErrorResponse;
use crate::config::GENERIC_FAILURE_MESSAGE;
use crate::error_handling::AnalysisError;

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AnalysisError::Validation { message, field } => {
                (StatusCode::BAD_REQUEST, ErrorResponse { message, field })
            }
            fetch @ AnalysisError::Fetch(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: fetch.to_string(),
                    field: None,
                },
            ),
            AnalysisError::Internal(e) => {
                error!("Analysis failed: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: GENERIC_FAILURE_MESSAGE.to_string(),
                        field: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Extracts the message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Response for a handler that panicked outside the analysis guard.
pub(crate) fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked: {}", panic_message(payload.as_ref()));
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            field: None,
        }),
    )
        .into_response()
}
