//! API server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::storage::ScanStore;

/// Shared state for the API server
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub store: Arc<dyn ScanStore>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, store: Arc<dyn ScanStore>) -> Self {
        Self { analyzer, store }
    }
}

/// Body of `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// A missing field is treated like an empty URL.
    #[serde(default)]
    pub url: String,
}

/// Query string of `GET /api/scans`
#[derive(Debug, Default, Deserialize)]
pub struct ScansQuery {
    pub limit: Option<u32>,
}

/// JSON error body shared by all endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// JSON response for `GET /api/health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub scan_log: &'static str,
}
