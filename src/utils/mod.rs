//! Utility functions for HTML extraction.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text normalization shared by the extractors

mod selector;
mod text;

pub use selector::parse_selector_unsafe;
pub use text::non_empty_trimmed;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
