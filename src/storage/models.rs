//! Scan history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle state of a recorded scan.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScanStatus {
    Pending,
    Success,
    Failed,
}

/// One row of the scan log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLogEntry {
    pub id: i64,
    pub url: String,
    pub status: ScanStatus,
    /// Serialized as RFC 3339; stored as epoch milliseconds.
    pub created_at: DateTime<Utc>,
}
