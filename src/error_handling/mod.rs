//! Error handling.
//!
//! This module provides:
//! - The analysis error taxonomy (validation, fetch, internal)
//! - Initialization and database error types
//! - Categorization of transport failures reported by `reqwest`
//!
//! Analysis errors are categorized into:
//! - **Validation**: the submitted URL or request body is malformed
//! - **Fetch**: the target page is unreachable or answered with a non-2xx status
//! - **Internal**: anything else; reported to callers as an opaque message

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_fetch_failure};
pub use types::{AnalysisError, DatabaseError, FetchErrorKind, InitializationError};
