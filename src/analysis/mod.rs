//! Page analysis.
//!
//! Turns a URL into an [`AnalysisReport`]: validate, fetch once, extract
//! metadata and content statistics, evaluate the rule table. Analysis has no
//! side effects; scan history is recorded by the caller.

pub mod checks;
pub mod preview;
pub mod score;

use std::sync::Arc;

use log::{debug, info};
use scraper::Html;

pub use checks::{evaluate_checks, PageFacts, CHECK_RULES};
pub use preview::{search_preview, social_preview, SearchPreview, SocialPreview};
pub use score::{summarize, Category, CategoryScore, ScoreSummary, Verdict};

use crate::app::{validate_analysis_url, AnalysisRequest};
use crate::error_handling::AnalysisError;
use crate::fetch::fetch_document;
use crate::models::{AnalysisReport, Performance};
use crate::parse::{extract_content, extract_meta_tags, extract_open_graph, extract_twitter_card};

/// Builds the report for an already-fetched HTML document.
pub fn analyze_html(request: &AnalysisRequest, html: &str) -> AnalysisReport {
    let document = Html::parse_document(html);

    let meta = extract_meta_tags(&document);
    let open_graph = extract_open_graph(&document);
    let twitter_card = extract_twitter_card(&document);
    let content = extract_content(&document);

    let checks = evaluate_checks(&PageFacts {
        is_https: request.is_https(),
        meta: &meta,
        open_graph: &open_graph,
        content: &content,
    });

    AnalysisReport {
        url: request.as_str().to_string(),
        meta,
        open_graph,
        twitter_card,
        content,
        performance: Performance::placeholder(),
        checks,
    }
}

/// Fetches and analyzes pages with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Arc<reqwest::Client>,
}

impl Analyzer {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Validates `url` and analyzes it.
    ///
    /// # Errors
    ///
    /// `AnalysisError::Validation` before any network access if the URL is
    /// malformed, `AnalysisError::Fetch` if the page cannot be retrieved.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisReport, AnalysisError> {
        let request = validate_analysis_url(url)?;
        self.analyze_request(&request).await
    }

    /// Analyzes a URL that has already passed validation.
    pub async fn analyze_request(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, AnalysisError> {
        let html = fetch_document(&self.client, request).await?;
        debug!("Fetched {} bytes from {}", html.len(), request.as_str());

        let report = analyze_html(request, &html);
        info!(
            "Analyzed {}: {} words, {} images",
            report.url, report.content.word_count, report.content.image_count
        );
        Ok(report)
    }
}
