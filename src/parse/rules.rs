//! Ordered extraction rules.
//!
//! A field rule is a pure function from a parsed document to an optional
//! value. Fields with fallbacks declare an ordered list of rules; the first
//! rule that yields a value wins.

use scraper::{Html, Selector};

use crate::utils::non_empty_trimmed;

/// A single extraction rule.
pub type FieldRule = fn(&Html) -> Option<String>;

/// Evaluates `rules` in declared order and returns the first value found.
pub fn first_match(document: &Html, rules: &[FieldRule]) -> Option<String> {
    rules.iter().find_map(|rule| rule(document))
}

/// Reads `attr` from the first element matching `selector`.
///
/// Only the first match is consulted: a later element with the same name does
/// not stand in for an empty first one.
pub fn first_attribute(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .and_then(non_empty_trimmed)
}

/// Declares a `FieldRule` that reads one attribute of the first element
/// matching a static selector.
macro_rules! attribute_rule {
    ($(#[$doc:meta])* $name:ident, $selector:literal, $attr:literal) => {
        $(#[$doc])*
        pub fn $name(document: &scraper::Html) -> Option<String> {
            static SELECTOR: std::sync::LazyLock<scraper::Selector> =
                std::sync::LazyLock::new(|| {
                    crate::utils::parse_selector_unsafe($selector, stringify!($name))
                });
            crate::parse::rules::first_attribute(document, &SELECTOR, $attr)
        }
    };
}

pub(crate) use attribute_rule;
