//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (plain or JSON)
//! - HTTP client used to fetch target pages
//! - Scan history store
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod store;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use store::init_scan_store;
