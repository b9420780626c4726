//! URL validation for analysis requests.

use log::debug;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// A validated analysis target.
///
/// Holds an absolute `http` or `https` URL with a host. The string the caller
/// submitted is kept verbatim for reporting and scan history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    raw: String,
    parsed: Url,
}

impl AnalysisRequest {
    /// Validates a submitted URL. See [`validate_analysis_url`].
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        validate_analysis_url(input)
    }

    /// The URL exactly as submitted (surrounding whitespace removed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL used for fetching.
    pub fn url(&self) -> &Url {
        &self.parsed
    }

    /// Returns true when the submitted URL uses the `https` scheme.
    pub fn is_https(&self) -> bool {
        self.parsed.scheme() == "https"
    }
}

/// Validates a URL submitted for analysis.
///
/// Unlike bulk scanning, no scheme is inferred: the input must already be an
/// absolute `http://` or `https://` URL with a host, at most `MAX_URL_LENGTH`
/// characters long. Nothing is fetched before this check passes.
///
/// # Errors
///
/// Returns `AnalysisError::Validation` naming the `url` field.
pub fn validate_analysis_url(input: &str) -> Result<AnalysisRequest, AnalysisError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        debug!("Rejecting empty URL");
        return Err(AnalysisError::invalid_url());
    }

    if trimmed.len() > MAX_URL_LENGTH {
        debug!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            trimmed.len(),
            MAX_URL_LENGTH,
            trimmed.chars().take(50).collect::<String>()
        );
        return Err(AnalysisError::invalid_url());
    }

    let parsed = match Url::parse(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Rejecting invalid URL {trimmed}: {e}");
            return Err(AnalysisError::invalid_url());
        }
    };

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            debug!("Rejecting unsupported scheme {other} for URL: {trimmed}");
            return Err(AnalysisError::invalid_url());
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        debug!("Rejecting URL without host: {trimmed}");
        return Err(AnalysisError::invalid_url());
    }

    Ok(AnalysisRequest {
        raw: trimmed.to_string(),
        parsed,
    })
}
