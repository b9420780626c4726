//! Score, verdict, and checklist derived from a report's checks.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::models::{AnalysisReport, CheckName, CheckResult, CheckStatus, Checks};

/// Overall grade for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Verdict {
    Excellent,
    Good,
    #[strum(serialize = "Needs Improvement")]
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Verdict::Excellent
        } else if score >= 70 {
            Verdict::Good
        } else {
            Verdict::NeedsImprovement
        }
    }
}

/// Groups of checks shown together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum Category {
    #[strum(serialize = "Meta Tags")]
    MetaTags,
    #[strum(serialize = "Social Media")]
    SocialMedia,
    #[strum(serialize = "Content")]
    Content,
}

impl Category {
    pub fn checks(&self) -> &'static [CheckName] {
        match self {
            Category::MetaTags => &[
                CheckName::TitleLength,
                CheckName::DescriptionLength,
                CheckName::HasCanonical,
                CheckName::Https,
            ],
            Category::SocialMedia => &[CheckName::HasOgImage],
            Category::Content => &[CheckName::HasH1, CheckName::MissingAltText],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub passed: usize,
    pub total: usize,
    pub score: u8,
}

/// Summary of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary<'a> {
    pub score: u8,
    pub passed: usize,
    pub total: usize,
    pub verdict: Verdict,
    pub categories: Vec<CategoryScore>,
    /// Failures first, then warnings, then passes; report order within a group.
    pub checklist: Vec<(CheckName, &'a CheckResult)>,
}

/// Percentage of passing results, rounded half up. `None` when there are none.
fn percentage(passed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (passed as f64 / total as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

fn count_passed<'a>(results: impl Iterator<Item = &'a CheckResult>) -> (usize, usize) {
    results.fold((0, 0), |(passed, total), result| {
        let hit = usize::from(result.status == CheckStatus::Pass);
        (passed + hit, total + 1)
    })
}

/// Scores one category. A category without results scores 100.
pub fn category_score(checks: &Checks, category: Category) -> CategoryScore {
    let (passed, total) = count_passed(
        category
            .checks()
            .iter()
            .filter_map(|name| checks.get(name)),
    );
    CategoryScore {
        category,
        passed,
        total,
        score: percentage(passed, total).unwrap_or(100),
    }
}

/// Orders check results for display: fail, warning, pass.
pub fn checklist(checks: &Checks) -> Vec<(CheckName, &CheckResult)> {
    let mut items: Vec<(CheckName, &CheckResult)> =
        checks.iter().map(|(name, result)| (*name, result)).collect();
    // sort_by_key is stable, so report order survives within a status group
    items.sort_by_key(|(_, result)| result.status.severity_rank());
    items
}

/// Computes the overall score, verdict, category scores, and checklist.
pub fn summarize(report: &AnalysisReport) -> ScoreSummary<'_> {
    use strum::IntoEnumIterator;

    let (passed, total) = count_passed(report.checks.values());
    let score = percentage(passed, total).unwrap_or(0);

    ScoreSummary {
        score,
        passed,
        total,
        verdict: Verdict::from_score(score),
        categories: Category::iter()
            .map(|category| category_score(&report.checks, category))
            .collect(),
        checklist: checklist(&report.checks),
    }
}
