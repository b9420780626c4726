//! Terminal output for one-shot analysis.

use std::fmt::Write as _;

use colored::*;

use crate::analysis::{search_preview, social_preview, summarize, Verdict};
use crate::models::{AnalysisReport, CheckStatus};

fn status_badge(status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Pass => "PASS".green().bold(),
        CheckStatus::Warning => "WARN".yellow().bold(),
        CheckStatus::Fail => "FAIL".red().bold(),
    }
}

fn verdict_colored(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Excellent => verdict.to_string().green(),
        Verdict::Good => verdict.to_string().yellow(),
        Verdict::NeedsImprovement => verdict.to_string().red(),
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Renders the checklist, score, and previews for a report.
pub fn render_summary(report: &AnalysisReport) -> String {
    let summary = summarize(report);
    let search = search_preview(report);
    let social = social_preview(report);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{} {}", "SEO report for".bold(), report.url.cyan());
    let _ = writeln!(
        out,
        "Score: {}/100 ({}) - {}/{} checks passed",
        summary.score, verdict_colored(summary.verdict), summary.passed, summary.total
    );
    for category in &summary.categories {
        let _ = writeln!(
            out,
            "  {:<13} {:>3}% ({}/{})",
            category.category.to_string(),
            category.score,
            category.passed,
            category.total
        );
    }

    let _ = writeln!(out, "\n{}", "Checklist".bold());
    for (name, result) in &summary.checklist {
        let _ = writeln!(
            out,
            "  [{}] {:<20} {}",
            status_badge(result.status),
            name.label(),
            result.message
        );
    }

    let _ = writeln!(out, "\n{}", "Content".bold());
    let _ = writeln!(
        out,
        "  H1: {}  H2: {}  H3: {}  Words: {}  Images: {} ({} without alt)",
        report.content.h1.len(),
        report.content.h2.len(),
        report.content.h3.len(),
        report.content.word_count,
        report.content.image_count,
        report.content.images_without_alt
    );
    let _ = writeln!(out, "  Canonical: {}", or_dash(report.meta.canonical.as_deref()));
    let _ = writeln!(out, "  Robots: {}", or_dash(report.meta.robots.as_deref()));

    let _ = writeln!(out, "\n{}", "Search preview".bold());
    let _ = writeln!(out, "  {} | {}", search.site_name, search.display_host.dimmed());
    let _ = writeln!(out, "  {}", search.title.blue().underline());
    let _ = writeln!(out, "  {}", search.description);

    let _ = writeln!(out, "\n{}", "Social preview".bold());
    let _ = writeln!(out, "  {}", social.title.bold());
    let _ = writeln!(out, "  {}", social.description);
    let _ = writeln!(out, "  Image: {}", or_dash(social.image.as_deref()));
    let _ = writeln!(
        out,
        "  og:type: {}  twitter:card: {}",
        social.og_type, social.twitter_card
    );

    out
}

/// Prints the colored summary to stdout.
pub fn print_summary(report: &AnalysisReport) {
    print!("{}", render_summary(report));
}

/// Prints the report as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn print_json_report(report: &AnalysisReport) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
