//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    TCP_CONNECT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file loaded at startup).
///
/// # Examples
///
/// ```bash
/// # Serve the API with scan history stored in SQLite
/// seo_scan --database ./seo_scan.db
///
/// # Serve without scan history on a custom port
/// seo_scan --port 8080
///
/// # Analyze a single page and print the checklist
/// seo_scan --analyze https://example.com
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_scan",
    about = "Fetches a page and reports on its SEO meta tags."
)]
pub struct Config {
    /// Analyze a single URL, print the result, and exit instead of serving the API
    #[arg(long, value_name = "URL")]
    pub analyze: Option<String>,

    /// With --analyze, print the full JSON report instead of the checklist
    #[arg(long, requires = "analyze")]
    pub json: bool,

    /// Address to bind the HTTP API to
    #[arg(long, env = "SEO_SCAN_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port for the HTTP API
    #[arg(long, env = "SEO_SCAN_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite file for scan history. Scan history is disabled when unset.
    #[arg(long = "database", env = "DATABASE_PATH", value_parser)]
    pub database_path: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEO_SCAN_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[arg(long, env = "SEO_SCAN_CONNECT_TIMEOUT_SECONDS", default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value sent to target sites
    #[arg(long, env = "SEO_SCAN_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Total timeout applied to each fetch of a target page.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Timeout for establishing the TCP connection to a target page.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Returns true when a scan history store is configured.
    pub fn scan_log_enabled(&self) -> bool {
        self.database_path.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyze: None,
            json: false,
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            database_path: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: TCP_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
