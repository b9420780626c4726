//! Body content statistics.
//!
//! Headings, visible word count, and image alt-text coverage.

use scraper::node::Node;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::ContentStats;
use crate::utils::parse_selector_unsafe;

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h2", "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h3", "H3_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "BODY_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Elements whose text never renders as page copy.
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Trimmed text of every element matching `selector`, in document order.
fn heading_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

fn is_non_visible(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| NON_VISIBLE_ELEMENTS.contains(&element.name()))
}

/// Visible text of the `<body>`, text nodes concatenated in document order.
pub fn visible_body_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut text = String::new();
    for node in body.descendants() {
        if let Some(fragment) = node.value().as_text() {
            if !node.ancestors().any(|ancestor| is_non_visible(ancestor.value())) {
                text.push_str(fragment);
            }
        }
    }
    text
}

/// Number of whitespace-delimited tokens in the visible body text.
pub fn count_words(document: &Html) -> usize {
    visible_body_text(document).split_whitespace().count()
}

/// Returns `(image_count, images_without_alt)`.
///
/// An image counts as lacking alt text when the attribute is missing or blank.
pub fn count_images(document: &Html) -> (usize, usize) {
    document
        .select(&IMG_SELECTOR)
        .fold((0, 0), |(total, missing), image| {
            let has_alt = image
                .value()
                .attr("alt")
                .is_some_and(|alt| !alt.trim().is_empty());
            (total + 1, if has_alt { missing } else { missing + 1 })
        })
}

/// Extracts heading, word, and image statistics from a document.
pub fn extract_content(document: &Html) -> ContentStats {
    let (image_count, images_without_alt) = count_images(document);
    ContentStats {
        h1: heading_texts(document, &H1_SELECTOR),
        h2: heading_texts(document, &H2_SELECTOR),
        h3: heading_texts(document, &H3_SELECTOR),
        word_count: count_words(document),
        image_count,
        images_without_alt,
    }
}
