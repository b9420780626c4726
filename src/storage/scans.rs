//! Scan log stores.
//!
//! The HTTP layer and the CLI record every scan twice: `pending` before the
//! analysis and `success` or `failed` after it. Each write is an independent
//! append; rows are never updated.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::models::{ScanLogEntry, ScanStatus};
use crate::error_handling::DatabaseError;

/// Persistence for the scan log.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Appends a scan row. Returns `None` when scan history is disabled.
    async fn record_scan(
        &self,
        url: &str,
        status: ScanStatus,
    ) -> Result<Option<ScanLogEntry>, DatabaseError>;

    /// Most recent scans, newest first.
    async fn list_recent_scans(&self, limit: u32) -> Result<Vec<ScanLogEntry>, DatabaseError>;
}

/// SQLite-backed scan log.
#[derive(Debug, Clone)]
pub struct SqliteScanStore {
    pool: Arc<SqlitePool>,
}

impl SqliteScanStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn decode_error(message: String) -> DatabaseError {
    DatabaseError::SqlError(sqlx::Error::Decode(message.into()))
}

fn entry_from_row(row: &SqliteRow) -> Result<ScanLogEntry, DatabaseError> {
    let status: String = row.try_get("status")?;
    let created_at_ms: i64 = row.try_get("created_at")?;

    Ok(ScanLogEntry {
        id: row.try_get("id")?,
        url: row.try_get("url")?,
        status: ScanStatus::from_str(&status)
            .map_err(|_| decode_error(format!("unknown scan status '{status}'")))?,
        created_at: DateTime::from_timestamp_millis(created_at_ms)
            .ok_or_else(|| decode_error(format!("invalid scan timestamp {created_at_ms}")))?,
    })
}

#[async_trait]
impl ScanStore for SqliteScanStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn record_scan(
        &self,
        url: &str,
        status: ScanStatus,
    ) -> Result<Option<ScanLogEntry>, DatabaseError> {
        let created_at = Utc::now().timestamp_millis();
        let row = sqlx::query(
            "INSERT INTO scans (url, status, created_at) VALUES (?, ?, ?)
             RETURNING id, url, status, created_at",
        )
        .bind(url)
        .bind(status.as_ref())
        .bind(created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        let entry = entry_from_row(&row)?;
        debug!("Recorded scan {} ({}) for {}", entry.id, entry.status, entry.url);
        Ok(Some(entry))
    }

    async fn list_recent_scans(&self, limit: u32) -> Result<Vec<ScanLogEntry>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT id, url, status, created_at FROM scans
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(entry_from_row).collect()
    }
}

/// Scan log used when no database is configured. Records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledScanStore;

#[async_trait]
impl ScanStore for DisabledScanStore {
    fn backend(&self) -> &'static str {
        "disabled"
    }

    async fn record_scan(
        &self,
        _url: &str,
        _status: ScanStatus,
    ) -> Result<Option<ScanLogEntry>, DatabaseError> {
        Ok(None)
    }

    async fn list_recent_scans(&self, _limit: u32) -> Result<Vec<ScanLogEntry>, DatabaseError> {
        Ok(Vec::new())
    }
}

/// Appends a scan row, logging instead of failing when the write fails.
///
/// Scan history never changes the outcome reported to the caller.
pub async fn record_scan_best_effort(store: &dyn ScanStore, url: &str, status: ScanStatus) {
    if let Err(e) = store.record_scan(url, status).await {
        warn!("Failed to record {status} scan for {url}: {e}");
    }
}
