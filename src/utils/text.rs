//! Text normalization helpers.

/// Trims `value` and returns it as an owned string, or `None` if nothing is left.
///
/// Empty titles and attributes count as missing everywhere in the report.
pub fn non_empty_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

