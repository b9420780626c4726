//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_scan` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_scan::app::{print_json_report, print_summary};
use seo_scan::initialization::init_logger_with;
use seo_scan::{analyze_url, run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let Some(url) = config.analyze.clone() else {
        if let Err(e) = run_server(config).await {
            eprintln!("seo_scan error: {:#}", e);
            process::exit(1);
        }
        return Ok(());
    };

    match analyze_url(&config, &url).await {
        Ok(report) => {
            if config.json {
                print_json_report(&report).context("Failed to serialize report")?;
            } else {
                print_summary(&report);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_scan error: {:#}", e);
            process::exit(1);
        }
    }
}
