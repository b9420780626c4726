//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::INVALID_URL_MESSAGE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Failures produced while analyzing a page.
///
/// The analysis is all-or-nothing: any of these aborts it and no partial
/// report is returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The submitted URL or request body is malformed.
    #[error("{message}")]
    Validation {
        message: String,
        /// Name of the offending request field, when one can be named.
        field: Option<String>,
    },

    /// The target could not be reached or answered with a non-success status.
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// Anything else. Never shown to API callers verbatim.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Validation failure pointing at the `url` field.
    pub fn invalid_url() -> Self {
        Self::Validation {
            message: INVALID_URL_MESSAGE.to_string(),
            field: Some("url".to_string()),
        }
    }

    /// Validation failure for a request body that could not be read at all.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Fetch failure carrying the remote status text or transport reason.
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch(reason.into())
    }
}

/// Kinds of transport failures when fetching a target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Builder => "invalid request",
            FetchErrorKind::Redirect => "too many redirects",
            FetchErrorKind::Timeout => "request timed out",
            FetchErrorKind::Connect => "could not connect to host",
            FetchErrorKind::Request => "request failed",
            FetchErrorKind::Body => "failed to read response body",
            FetchErrorKind::Decode => "failed to decode response body",
            FetchErrorKind::Other => "network error",
        }
    }
}
