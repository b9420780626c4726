//! Shared test helpers for storage module tests.

use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::storage::{init_db_pool_with_path, run_migrations};

/// Creates a file-backed test database with migrations applied.
///
/// The returned `TempDir` owns the database file; keep it alive for the
/// duration of the test.
pub async fn create_test_pool() -> (Arc<SqlitePool>, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = init_db_pool_with_path(&dir.path().join("test.db"))
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    (pool, dir)
}

/// Inserts a scan row with an explicit timestamp and returns its id.
pub async fn insert_scan_at(pool: &SqlitePool, url: &str, status: &str, created_at_ms: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO scans (url, status, created_at) VALUES (?, ?, ?) RETURNING id")
        .bind(url)
        .bind(status)
        .bind(created_at_ms)
        .fetch_one(pool)
        .await
        .expect("Failed to insert test scan")
}
