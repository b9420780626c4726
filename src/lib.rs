//! seo_scan library: single-page SEO and meta-tag analysis
//!
//! This library fetches a page, extracts its head metadata, Open Graph and
//! Twitter Card properties, and body statistics, then evaluates a fixed set
//! of SEO checks. It also provides the HTTP API that serves the analysis and
//! an optional SQLite-backed scan history.
//!
//! # Example
//!
//! ```no_run
//! use seo_scan::{analyze_url, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let report = analyze_url(&config, "https://example.com").await?;
//! for (name, check) in &report.checks {
//!     println!("{name}: {} ({})", check.status, check.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod server;
pub mod storage;
mod utils;

// Re-export public API
pub use analysis::Analyzer;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::AnalysisError;
pub use models::{AnalysisReport, CheckName, CheckResult, CheckStatus};
pub use run::{analyze_url, run_server};

// Entry points shared by the binary and library users
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::analysis::Analyzer;
    use crate::app::validate_analysis_url;
    use crate::config::Config;
    use crate::initialization::{init_client, init_scan_store};
    use crate::models::AnalysisReport;
    use crate::server::{start_server, AppState};
    use crate::storage::{record_scan_best_effort, ScanStatus};

    /// Analyzes one URL with the HTTP client and scan history described by `config`.
    ///
    /// The scan is recorded like an API request: `pending` once the URL is
    /// valid, then `success` or `failed`.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails, the URL is malformed, or the
    /// page cannot be fetched. Analysis errors are kept as the root cause and
    /// can be recovered with `downcast_ref::<AnalysisError>()`.
    pub async fn analyze_url(config: &Config, url: &str) -> Result<AnalysisReport> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let store = init_scan_store(config)
            .await
            .context("Failed to initialize scan history")?;

        let request = validate_analysis_url(url)?;
        record_scan_best_effort(store.as_ref(), request.as_str(), ScanStatus::Pending).await;

        let outcome = Analyzer::new(client).analyze_request(&request).await;
        let status = match outcome {
            Ok(_) => ScanStatus::Success,
            Err(_) => ScanStatus::Failed,
        };
        record_scan_best_effort(store.as_ref(), request.as_str(), status).await;

        Ok(outcome?)
    }

    /// Serves the HTTP API until ctrl-c.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails or the listener cannot bind.
    pub async fn run_server(config: Config) -> Result<()> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let store = init_scan_store(&config)
            .await
            .context("Failed to initialize scan history")?;

        info!(
            "Starting API server (timeout {}s, scan history {})",
            config.timeout_seconds,
            store.backend()
        );

        let state = AppState::new(Analyzer::new(client), store);
        start_server(&config.bind, config.port, state).await
    }
}
