//! Analysis report data model.
//!
//! The report is the only output of the page analyzer. It serializes to the
//! camelCase JSON returned by `POST /api/analyze`; absent values are `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Standard head metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub keywords: Option<String>,
    pub robots: Option<String>,
    pub author: Option<String>,
    pub viewport: Option<String>,
    pub charset: Option<String>,
}

/// Open Graph properties (`og:*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub site_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Twitter Card properties (`twitter:*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub creator: Option<String>,
}

/// Heading, word, and image statistics for the page body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub word_count: usize,
    pub image_count: usize,
    /// Never exceeds `image_count`.
    pub images_without_alt: usize,
}

/// Performance figures.
///
/// `load_time` is not measured; it is always reported as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub load_time: Option<u64>,
}

impl Performance {
    pub fn placeholder() -> Self {
        Self { load_time: Some(0) }
    }
}

/// Outcome of a single check.
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
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    /// Sort rank for checklists: failures first, then warnings, then passes.
    pub fn severity_rank(&self) -> u8 {
        match self {
            CheckStatus::Fail => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Pass => 2,
        }
    }
}

/// Names of the fixed rule set, in report order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CheckName {
    TitleLength,
    DescriptionLength,
    HasH1,
    HasOgImage,
    HasCanonical,
    Https,
    MissingAltText,
}

impl CheckName {
    /// Human-readable label used in terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            CheckName::TitleLength => "Title length",
            CheckName::DescriptionLength => "Description length",
            CheckName::HasH1 => "H1 heading",
            CheckName::HasOgImage => "Open Graph image",
            CheckName::HasCanonical => "Canonical link",
            CheckName::Https => "HTTPS",
            CheckName::MissingAltText => "Image alt text",
        }
    }
}

/// Result record of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, message)
    }
}

/// Check results keyed by name, iterated in report order.
pub type Checks = BTreeMap<CheckName, CheckResult>;

/// The page analyzer's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// The analyzed URL as submitted.
    pub url: String,
    pub meta: MetaTags,
    pub open_graph: OpenGraph,
    pub twitter_card: TwitterCard,
    pub content: ContentStats,
    pub performance: Performance,
    pub checks: Checks,
}

impl AnalysisReport {
    /// Looks up one check result. All checks are always present.
    pub fn check(&self, name: CheckName) -> Option<&CheckResult> {
        self.checks.get(&name)
    }

    /// Status of one check, if present.
    pub fn status(&self, name: CheckName) -> Option<CheckStatus> {
        self.check(name).map(|c| c.status)
    }
}
