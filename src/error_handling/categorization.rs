//! Error categorization.
//!
//! This module maps `reqwest` transport failures onto `FetchErrorKind` and
//! renders them as the reason text carried by `AnalysisError::Fetch`.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Status errors never reach this function: non-2xx responses are turned into
/// fetch errors from the response itself, using its canonical reason phrase.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_builder() {
        FetchErrorKind::Builder
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_request() {
        FetchErrorKind::Request
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    }
}

/// Builds the user-facing reason for a transport failure.
pub fn describe_fetch_failure(error: &reqwest::Error) -> String {
    let kind = categorize_reqwest_error(error);
    log::debug!("Fetch failed ({}): {:?}", kind, error);
    kind.as_str().to_string()
}
