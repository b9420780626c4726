//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// Static selectors are compiled once into `LazyLock`s; a selector that fails
/// to parse is a programming error, so this panics with the offending string.
///
/// # Panics
///
/// Panics if the selector cannot be parsed.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
