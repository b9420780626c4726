//! `POST /api/analyze` handler.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::FutureExt;
use log::{debug, info};

use super::super::error::panic_message;
use super::super::types::{AnalyzeRequest, AppState};
use crate::app::validate_analysis_url;
use crate::config::INVALID_BODY_MESSAGE;
use crate::error_handling::AnalysisError;
use crate::storage::{record_scan_best_effort, ScanStatus};

/// Analyzes the submitted URL and records the scan.
///
/// The URL is validated before anything is logged or fetched. A valid
/// request is recorded as `pending`, then as `success` or `failed` once the
/// analysis settles, including when the analysis panics.
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return reject_body(rejection).into_response(),
    };

    let request = match validate_analysis_url(&body.url) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    let store = state.store.as_ref();
    record_scan_best_effort(store, request.as_str(), ScanStatus::Pending).await;

    let outcome = catch_analysis_panic(state.analyzer.analyze_request(&request)).await;

    let status = if outcome.is_ok() {
        ScanStatus::Success
    } else {
        ScanStatus::Failed
    };
    record_scan_best_effort(store, request.as_str(), status).await;

    match outcome {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            info!("Analysis of {} failed: {}", request.as_str(), e);
            e.into_response()
        }
    }
}

/// Maps a body rejection onto a validation error.
///
/// A well-formed object whose `url` has the wrong type is reported against
/// the `url` field. Deserializer wording never reaches the caller.
fn reject_body(rejection: JsonRejection) -> AnalysisError {
    debug!("Rejected analyze request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::JsonDataError(_) => AnalysisError::invalid_url(),
        _ => AnalysisError::invalid_body(INVALID_BODY_MESSAGE),
    }
}

/// Turns a panic inside `analysis` into `AnalysisError::Internal`.
pub(crate) async fn catch_analysis_panic<T, F>(analysis: F) -> Result<T, AnalysisError>
where
    F: Future<Output = Result<T, AnalysisError>>,
{
    match AssertUnwindSafe(analysis).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => Err(AnalysisError::Internal(anyhow::anyhow!(
            "analysis panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}
