//! Standard head metadata extraction.
//!
//! This module extracts the page title, meta description, canonical link,
//! and the remaining `<meta name=...>` and `<meta charset>` values.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::rules::{attribute_rule, first_match, FieldRule};
use super::social::{og_description, og_title};
use crate::models::MetaTags;
use crate::utils::non_empty_trimmed;

const TITLE_SELECTOR_STR: &str = "title";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

/// Title fallback chain: `<title>` text, then `og:title`.
const TITLE_RULES: &[FieldRule] = &[title_element_text, og_title];

/// Description fallback chain: `<meta name="description">`, then `og:description`.
const DESCRIPTION_RULES: &[FieldRule] = &[meta_description, og_description];

/// Text of the first `<title>` element, trimmed. Entities are decoded by the parser.
pub fn title_element_text(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let title = non_empty_trimmed(&element.text().collect::<String>());
    log::debug!("Extracted title text: {:?}", title);
    title
}

attribute_rule!(
    /// `<meta name="description">` content.
    meta_description,
    "meta[name='description']",
    "content"
);
attribute_rule!(
    /// `<link rel="canonical">` href.
    canonical_link,
    "link[rel='canonical']",
    "href"
);
attribute_rule!(meta_keywords, "meta[name='keywords']", "content");
attribute_rule!(meta_robots, "meta[name='robots']", "content");
attribute_rule!(meta_author, "meta[name='author']", "content");
attribute_rule!(meta_viewport, "meta[name='viewport']", "content");
attribute_rule!(
    /// Value of the first `<meta charset>` attribute.
    meta_charset,
    "meta[charset]",
    "charset"
);

/// Extracts the standard head metadata of a document.
pub fn extract_meta_tags(document: &Html) -> MetaTags {
    MetaTags {
        title: first_match(document, TITLE_RULES),
        description: first_match(document, DESCRIPTION_RULES),
        canonical: canonical_link(document),
        keywords: meta_keywords(document),
        robots: meta_robots(document),
        author: meta_author(document),
        viewport: meta_viewport(document),
        charset: meta_charset(document),
    }
}
