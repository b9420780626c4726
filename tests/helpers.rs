// Shared test helpers for spinning up the API and fake target sites.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seo_scan::initialization::{init_client, init_scan_store};
use seo_scan::server::{serve, AppState};
use seo_scan::storage::ScanStore;
use seo_scan::{Analyzer, Config};

/// A page with a short title, one H1, no og:image, no canonical, and four
/// images without alt text.
#[allow(dead_code)]
pub const FIXTURE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Short</title></head>
<body>
  <h1>Only heading</h1>
  <p>A handful of words in the body.</p>
  <img src="/a.png"><img src="/b.png"><img src="/c.png"><img src="/d.png">
</body>
</html>"#;

/// A page that passes every check when served over https.
#[allow(dead_code)]
pub const COMPLETE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>A well sized page title for tests</title>
  <meta name="description" content="A meta description that is comfortably longer than fifty characters in total.">
  <link rel="canonical" href="https://example.com/">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:site_name" content="Example">
  <meta name="twitter:card" content="summary">
</head>
<body>
  <h1>Main heading</h1>
  <h2>Sub heading</h2>
  <img src="/a.png" alt="An image">
</body>
</html>"#;

/// A running API server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    #[allow(dead_code)]
    pub store: Arc<dyn ScanStore>,
    // Keeps the SQLite file alive for the duration of the test
    _db_dir: Option<TempDir>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, route: &str) -> String {
        format!("http://{}{}", self.addr, route)
    }
}

/// Starts the API with a SQLite scan log in a temporary directory.
#[allow(dead_code)]
pub async fn spawn_server_with_scan_log() -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        database_path: Some(dir.path().join("scans.db")),
        ..Default::default()
    };
    spawn_server(config, Some(dir)).await
}

/// Starts the API without scan history.
#[allow(dead_code)]
pub async fn spawn_server_without_scan_log() -> TestServer {
    spawn_server(Config::default(), None).await
}

async fn spawn_server(config: Config, db_dir: Option<TempDir>) -> TestServer {
    let client = init_client(&config).expect("Failed to build HTTP client");
    let store = init_scan_store(&config)
        .await
        .expect("Failed to initialize scan store");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let state = AppState::new(Analyzer::new(client), store.clone());
    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });

    TestServer {
        addr,
        store,
        _db_dir: db_dir,
    }
}

/// Serves `body` as HTML at `route` on a fresh mock server.
#[allow(dead_code)]
pub async fn mock_page(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .mount(&server)
        .await;
    server
}

/// Answers every request with `status` and an empty body.
#[allow(dead_code)]
pub async fn mock_status(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}
