//! End-to-end tests for `POST /api/analyze`.

mod helpers;

use helpers::{
    mock_page, mock_status, spawn_server_with_scan_log, spawn_server_without_scan_log,
    COMPLETE_PAGE, FIXTURE_PAGE,
};
use seo_scan::config::{INVALID_BODY_MESSAGE, MAX_RESPONSE_BODY_SIZE};
use seo_scan::storage::{ScanStatus, ScanStore};
use serde_json::{json, Value};

async fn post_analyze(url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("request to API");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("JSON body");
    (status, body)
}

#[tokio::test]
async fn test_analyze_fixture_page() {
    let server = spawn_server_without_scan_log().await;
    let target = mock_page("/fixture", FIXTURE_PAGE).await;
    let target_url = format!("{}/fixture", target.uri());

    let (status, report) = post_analyze(&server.url("/api/analyze"), json!({ "url": target_url })).await;

    assert_eq!(status, 200, "unexpected body: {report}");
    assert_eq!(report["url"], target_url);
    assert_eq!(report["meta"]["title"], "Short");
    assert!(report["meta"]["description"].is_null());
    assert_eq!(report["content"]["h1"], json!(["Only heading"]));
    assert_eq!(report["content"]["imageCount"], 4);
    assert_eq!(report["content"]["imagesWithoutAlt"], 4);
    assert_eq!(report["performance"]["loadTime"], 0);

    let checks = &report["checks"];
    assert_eq!(checks["titleLength"]["status"], "warning");
    assert_eq!(checks["hasH1"]["status"], "pass");
    assert_eq!(checks["hasOgImage"]["status"], "fail");
    assert_eq!(checks["hasCanonical"]["status"], "warning");
    assert_eq!(checks["missingAltText"]["status"], "fail");
    assert_eq!(checks["missingAltText"]["message"], "4 images are missing alt text.");
    // Mock targets are plain http
    assert_eq!(checks["https"]["status"], "fail");
}

#[tokio::test]
async fn test_analyze_report_has_every_section() {
    let server = spawn_server_without_scan_log().await;
    let target = mock_page("/", COMPLETE_PAGE).await;

    let (status, report) = post_analyze(
        &server.url("/api/analyze"),
        json!({ "url": format!("{}/", target.uri()) }),
    )
    .await;

    assert_eq!(status, 200);
    for section in ["meta", "openGraph", "twitterCard", "content", "performance", "checks"] {
        assert!(report[section].is_object(), "missing section {section}");
    }
    assert_eq!(report["meta"]["charset"], "utf-8");
    assert_eq!(report["openGraph"]["siteName"], "Example");
    assert_eq!(report["twitterCard"]["card"], "summary");
    assert_eq!(report["checks"].as_object().map(|c| c.len()), Some(7));
    assert_eq!(report["checks"]["titleLength"]["status"], "pass");
    assert_eq!(report["checks"]["descriptionLength"]["status"], "pass");
    assert_eq!(report["checks"]["hasCanonical"]["status"], "pass");
    assert_eq!(report["checks"]["missingAltText"]["status"], "pass");
}

#[tokio::test]
async fn test_analyze_rejects_invalid_url() {
    let server = spawn_server_with_scan_log().await;

    let (status, body) = post_analyze(&server.url("/api/analyze"), json!({ "url": "not-a-url" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["field"], "url");
    assert!(body["message"].as_str().is_some());

    // Nothing is logged for requests that never pass validation
    let scans = server.store.list_recent_scans(10).await.expect("list scans");
    assert!(scans.is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_missing_scheme_and_missing_field() {
    let server = spawn_server_without_scan_log().await;

    let (status, body) = post_analyze(&server.url("/api/analyze"), json!({ "url": "example.com" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["field"], "url");

    let (status, body) = post_analyze(&server.url("/api/analyze"), json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["field"], "url");
}

#[tokio::test]
async fn test_analyze_rejects_malformed_body() {
    let server = spawn_server_without_scan_log().await;

    let response = reqwest::Client::new()
        .post(server.url("/api/analyze"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request to API");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["message"], INVALID_BODY_MESSAGE);
    assert!(body.get("field").is_none());
}

#[tokio::test]
async fn test_analyze_rejects_non_string_url_against_url_field() {
    let server = spawn_server_with_scan_log().await;

    for url in [json!(123), json!(["https://example.com"]), json!({ "href": "x" })] {
        let (status, body) = post_analyze(&server.url("/api/analyze"), json!({ "url": url })).await;

        assert_eq!(status, 400, "url {url} should be rejected");
        assert_eq!(body["field"], "url");
        let message = body["message"].as_str().expect("message");
        assert!(!message.contains("deserialize"), "deserializer text leaked: {message}");
        assert!(!message.contains("invalid type"), "deserializer text leaked: {message}");
    }

    let scans = server.store.list_recent_scans(10).await.expect("list scans");
    assert!(scans.is_empty());
}

#[tokio::test]
async fn test_analyze_target_not_found_logs_failed_scan() {
    let server = spawn_server_with_scan_log().await;
    let target = mock_status(404).await;
    let target_url = format!("{}/missing", target.uri());

    let (status, body) = post_analyze(&server.url("/api/analyze"), json!({ "url": target_url })).await;

    assert_eq!(status, 400);
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("Not Found"), "unexpected message: {message}");
    assert!(body.get("field").is_none());

    let scans = server.store.list_recent_scans(10).await.expect("list scans");
    assert_eq!(scans.len(), 2);
    assert_eq!(scans[0].status, ScanStatus::Failed);
    assert_eq!(scans[0].url, target_url);
    assert_eq!(scans[1].status, ScanStatus::Pending);
}

#[tokio::test]
async fn test_analyze_success_logs_pending_then_success() {
    let server = spawn_server_with_scan_log().await;
    let target = mock_page("/", COMPLETE_PAGE).await;
    let target_url = format!("{}/", target.uri());

    let (status, _) = post_analyze(&server.url("/api/analyze"), json!({ "url": target_url })).await;
    assert_eq!(status, 200);

    let scans = server.store.list_recent_scans(10).await.expect("list scans");
    let statuses: Vec<ScanStatus> = scans.iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![ScanStatus::Success, ScanStatus::Pending]);
}

#[tokio::test]
async fn test_analyze_unreachable_target() {
    let server = spawn_server_without_scan_log().await;

    let (status, body) = post_analyze(
        &server.url("/api/analyze"),
        json!({ "url": "http://127.0.0.1:9/" }),
    )
    .await;

    assert_eq!(status, 400);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Failed to fetch URL:"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_analyze_oversized_page_is_truncated_not_rejected() {
    let server = spawn_server_with_scan_log().await;
    let page = format!(
        "<html><head><title>Archive of every post</title></head><body><h1>Archive</h1>{}</body></html>",
        "<p>older post</p>".repeat(MAX_RESPONSE_BODY_SIZE / 16 + 1024)
    );
    assert!(page.len() > MAX_RESPONSE_BODY_SIZE);
    let target = mock_page("/archive", &page).await;
    let target_url = format!("{}/archive", target.uri());

    let (status, report) = post_analyze(&server.url("/api/analyze"), json!({ "url": target_url })).await;

    assert_eq!(status, 200, "unexpected body: {report}");
    assert_eq!(report["meta"]["title"], "Archive of every post");
    assert_eq!(report["content"]["h1"], json!(["Archive"]));

    let scans = server.store.list_recent_scans(10).await.expect("list scans");
    assert_eq!(scans[0].status, ScanStatus::Success);
}
