//! HTML parsing and data extraction.
//!
//! This module extracts structured data from HTML content including:
//! - Head metadata (title, description, canonical, robots, viewport, charset, ...)
//! - Open Graph and Twitter Card properties
//! - Headings, visible word count, and image alt-text coverage
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Every
//! extractor is a pure function of the parsed document.

mod content;
mod html;
pub(crate) mod rules;
mod social;

// Re-export public API
pub use content::{count_images, count_words, extract_content, visible_body_text};
pub use html::{canonical_link, extract_meta_tags, meta_description, title_element_text};
pub use rules::{first_match, FieldRule};
pub use social::{extract_open_graph, extract_twitter_card, og_image};
