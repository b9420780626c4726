//! The fixed SEO rule set.
//!
//! Each check is a pure function over the extracted page facts. The table in
//! [`CHECK_RULES`] is evaluated in report order and always yields one result
//! per [`CheckName`].

use crate::config::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, MISSING_ALT_FAIL_THRESHOLD, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
use crate::models::{CheckName, CheckResult, Checks, ContentStats, MetaTags, OpenGraph};

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct PageFacts<'a> {
    /// Whether the submitted URL uses `https`.
    pub is_https: bool,
    pub meta: &'a MetaTags,
    pub open_graph: &'a OpenGraph,
    pub content: &'a ContentStats,
}

/// A single rule: facts in, verdict out.
pub type CheckRule = fn(&PageFacts<'_>) -> CheckResult;

/// Rule table in report order.
pub const CHECK_RULES: &[(CheckName, CheckRule)] = &[
    (CheckName::TitleLength, check_title_length),
    (CheckName::DescriptionLength, check_description_length),
    (CheckName::HasH1, check_has_h1),
    (CheckName::HasOgImage, check_has_og_image),
    (CheckName::HasCanonical, check_has_canonical),
    (CheckName::Https, check_https),
    (CheckName::MissingAltText, check_missing_alt_text),
];

/// Evaluates every rule against the page facts.
pub fn evaluate_checks(facts: &PageFacts<'_>) -> Checks {
    CHECK_RULES
        .iter()
        .map(|(name, rule)| (*name, rule(facts)))
        .collect()
}

/// Length window check shared by title and description.
///
/// A missing value counts as too short. Bounds are inclusive and lengths are
/// counted in characters, not bytes.
fn length_check(label: &str, value: Option<&str>, min: usize, max: usize) -> CheckResult {
    let length = value.map_or(0, |v| v.chars().count());
    if length < min {
        CheckResult::warning(format!("{label} is too short (< {min} chars)."))
    } else if length > max {
        CheckResult::warning(format!("{label} is too long (> {max} chars)."))
    } else {
        CheckResult::pass(format!(
            "{label} length is optimal ({min}-{max} characters)."
        ))
    }
}

pub fn check_title_length(facts: &PageFacts<'_>) -> CheckResult {
    length_check(
        "Title",
        facts.meta.title.as_deref(),
        TITLE_MIN_CHARS,
        TITLE_MAX_CHARS,
    )
}

pub fn check_description_length(facts: &PageFacts<'_>) -> CheckResult {
    length_check(
        "Description",
        facts.meta.description.as_deref(),
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    )
}

pub fn check_has_h1(facts: &PageFacts<'_>) -> CheckResult {
    if facts.content.h1.is_empty() {
        CheckResult::fail("Missing H1 tag.")
    } else {
        CheckResult::pass("H1 tag found.")
    }
}

pub fn check_has_og_image(facts: &PageFacts<'_>) -> CheckResult {
    if facts.open_graph.image.is_some() {
        CheckResult::pass("Open Graph image found.")
    } else {
        CheckResult::fail("Missing Open Graph image.")
    }
}

pub fn check_has_canonical(facts: &PageFacts<'_>) -> CheckResult {
    if facts.meta.canonical.is_some() {
        CheckResult::pass("Canonical tag found.")
    } else {
        CheckResult::warning("Missing canonical tag.")
    }
}

pub fn check_https(facts: &PageFacts<'_>) -> CheckResult {
    if facts.is_https {
        CheckResult::pass("Site uses HTTPS.")
    } else {
        CheckResult::fail("Site is not using HTTPS.")
    }
}

pub fn check_missing_alt_text(facts: &PageFacts<'_>) -> CheckResult {
    match facts.content.images_without_alt {
        0 => CheckResult::pass("All images have alt text."),
        n if n >= MISSING_ALT_FAIL_THRESHOLD => {
            CheckResult::fail(format!("{n} images are missing alt text."))
        }
        n => CheckResult::warning(format!("{n} images are missing alt text.")),
    }
}
