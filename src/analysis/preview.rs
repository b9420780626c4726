//! Search result and social card previews.

use url::Url;

use crate::models::AnalysisReport;

pub const SEARCH_TITLE_LIMIT: usize = 60;
pub const SEARCH_DESCRIPTION_LIMIT: usize = 160;

const NO_TITLE_FALLBACK: &str = "No Title Tag Found";
const NO_DESCRIPTION_FALLBACK: &str =
    "No meta description found. Google will use page content snippets instead.";
const DEFAULT_SITE_NAME: &str = "Website";
const SOCIAL_NO_TITLE: &str = "No Title";
const SOCIAL_NO_DESCRIPTION: &str = "No description available.";
const DEFAULT_OG_TYPE: &str = "website";
const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// How the page would render as a search engine result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPreview {
    pub site_name: String,
    pub display_host: String,
    pub url: String,
    pub title: String,
    pub description: String,
}

/// How the page would render when shared on social platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPreview {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub og_type: String,
    pub twitter_card: String,
}

/// Cuts `text` to `limit` characters and appends `...` when it was longer.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

fn display_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

pub fn search_preview(report: &AnalysisReport) -> SearchPreview {
    let title = report.meta.title.as_deref().unwrap_or(NO_TITLE_FALLBACK);
    let description = match report.meta.description.as_deref() {
        Some(description) => truncate_with_ellipsis(description, SEARCH_DESCRIPTION_LIMIT),
        None => NO_DESCRIPTION_FALLBACK.to_string(),
    };

    SearchPreview {
        site_name: report
            .open_graph
            .site_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        display_host: display_host(&report.url),
        url: report.url.clone(),
        title: truncate_with_ellipsis(title, SEARCH_TITLE_LIMIT),
        description,
    }
}

pub fn social_preview(report: &AnalysisReport) -> SocialPreview {
    let og = &report.open_graph;
    let meta = &report.meta;

    SocialPreview {
        title: og
            .title
            .as_deref()
            .or(meta.title.as_deref())
            .unwrap_or(SOCIAL_NO_TITLE)
            .to_string(),
        description: og
            .description
            .as_deref()
            .or(meta.description.as_deref())
            .unwrap_or(SOCIAL_NO_DESCRIPTION)
            .to_string(),
        image: og.image.clone().or_else(|| report.twitter_card.image.clone()),
        og_type: og.kind.as_deref().unwrap_or(DEFAULT_OG_TYPE).to_string(),
        twitter_card: report
            .twitter_card
            .card
            .as_deref()
            .unwrap_or(DEFAULT_TWITTER_CARD)
            .to_string(),
    }
}
