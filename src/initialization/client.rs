//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch target pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Total and connect timeouts from the configuration
/// - The client's default redirect policy
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
