//! HTTP API server.
//!
//! Provides three endpoints:
//! - `POST /api/analyze` - analyze one page and return its report
//! - `GET /api/scans` - recent scan history, newest first
//! - `GET /api/health` - liveness and scan log backend

mod error;
mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use handlers::{analyze_handler, health_handler, scans_handler};
pub use types::{AnalyzeRequest, AppState, ErrorResponse, HealthResponse, ScansQuery};

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/scans", get(scans_handler))
        .route("/api/health", get(health_handler))
        .with_state(state);
    with_panic_guard(routes)
}

/// Answers a panicking handler with a 500 JSON error instead of dropping the
/// connection.
fn with_panic_guard(routes: Router) -> Router {
    routes.layer(CatchPanicLayer::custom(error::panic_response))
}

/// Serves the API on an already-bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}

/// Binds `bind:port` and serves the API.
pub async fn start_server(bind: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", bind, port, e))?;

    log::info!("API server listening on http://{}:{}/", bind, port);
    log::info!("  - Analyze: POST http://{}:{}/api/analyze", bind, port);
    log::info!("  - Scans: GET http://{}:{}/api/scans", bind, port);

    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
