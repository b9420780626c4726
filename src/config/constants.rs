//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, check thresholds, and other operational parameters.

// Server defaults
/// Address the HTTP API binds to by default
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Port the HTTP API listens on by default
pub const DEFAULT_PORT: u16 = 5000;

// Network operation timeouts
/// Total per-request timeout in seconds for fetching the target page
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum response body size in bytes (2MB)
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the scanner as an automated client so target servers can tell
/// scanning traffic apart from browsers. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SeoScanBot/1.0; +https://github.com/seo-scan/seo_scan)";

// URL validation
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Check thresholds
/// Titles shorter than this (in characters) are reported as too short
pub const TITLE_MIN_CHARS: usize = 10;
/// Titles longer than this (in characters) are reported as too long
pub const TITLE_MAX_CHARS: usize = 60;
/// Descriptions shorter than this (in characters) are reported as too short
pub const DESCRIPTION_MIN_CHARS: usize = 50;
/// Descriptions longer than this (in characters) are reported as too long
pub const DESCRIPTION_MAX_CHARS: usize = 160;
/// Number of images without alt text at which the check fails instead of warning
pub const MISSING_ALT_FAIL_THRESHOLD: usize = 3;

// Scan history
/// Number of scans returned by `GET /api/scans` when no limit is given
pub const DEFAULT_RECENT_SCANS_LIMIT: u32 = 10;
/// Upper bound for the `limit` query parameter of `GET /api/scans`
pub const MAX_RECENT_SCANS_LIMIT: u32 = 100;

// Error responses
/// Message returned to API callers for unexpected processing failures
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to analyze website. Please check the URL and try again.";
/// Message returned to API callers when the submitted URL is malformed
pub const INVALID_URL_MESSAGE: &str =
    "Please enter a valid URL (including http:// or https://)";
/// Message returned to API callers when the request body is not a JSON object
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object with a url field.";
