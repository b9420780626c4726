//! Main application modules.
//!
//! This module provides URL validation for incoming analysis requests and the
//! terminal output used by the one-shot `--analyze` mode.

pub mod summary;
pub mod url;

// Re-export public API
pub use summary::{print_json_report, print_summary, render_summary};
pub use url::{validate_analysis_url, AnalysisRequest};
