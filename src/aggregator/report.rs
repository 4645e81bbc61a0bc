//! Versioned report envelope and its consistency checks.

use super::{ascending, descending, Summary, Thresholds};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Top-level structure written to the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// RFC 3339 timestamp of generation
    pub generated_at: String,

    /// Thresholds the filtered tables were built with
    pub thresholds: Thresholds,

    pub summary: Summary,
}

/// Wrap a summary in a report stamped with `generated_at`
pub fn to_report(summary: Summary, thresholds: Thresholds, generated_at: &str) -> Report {
    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        generated_at: generated_at.to_string(),
        thresholds,
        summary,
    }
}

/// Check that a report's tables respect their thresholds and sort orders
///
/// Returns one message per violation; an empty list means the report is
/// consistent.
pub fn check_report(report: &Report) -> Vec<String> {
    let mut violations = Vec::new();
    let t = &report.thresholds;
    let s = &report.summary;

    if report.version != REPORT_SCHEMA_VERSION {
        violations.push(format!(
            "schema version {} does not match {}",
            report.version, REPORT_SCHEMA_VERSION
        ));
    }

    for row in &s.batting_averages {
        if row.innings < u64::from(t.min_bat) {
            violations.push(format!(
                "batting_averages: {} has {} innings (min {})",
                row.name, row.innings, t.min_bat
            ));
        }
    }
    for row in &s.boundaries {
        if row.fours < u64::from(t.min_boundaries) {
            violations.push(format!(
                "boundaries: {} has {} fours (min {})",
                row.name, row.fours, t.min_boundaries
            ));
        }
    }
    for row in &s.bowling_averages {
        if row.overs < u64::from(t.min_bowl) {
            violations.push(format!(
                "bowling_averages: {} has {} overs (min {})",
                row.name, row.overs, t.min_bowl
            ));
        }
    }

    check_order(&mut violations, "total_runs", &s.total_runs, |a, b| b.runs.cmp(&a.runs));
    check_order(&mut violations, "top_scores", &s.top_scores, |a, b| b.runs.cmp(&a.runs));
    check_order(&mut violations, "ducks", &s.ducks, |a, b| b.count.cmp(&a.count));
    check_order(&mut violations, "boundaries", &s.boundaries, |a, b| b.fours.cmp(&a.fours));
    check_order(&mut violations, "fielding", &s.fielding, |a, b| b.catches.cmp(&a.catches));
    check_order(&mut violations, "batting_averages", &s.batting_averages, |a, b| {
        descending(a.average, b.average)
    });
    check_order(&mut violations, "bowling_averages", &s.bowling_averages, |a, b| {
        ascending(a.average, b.average)
    });
    check_order(&mut violations, "bowling_economy", &s.bowling_economy, |a, b| {
        ascending(a.economy, b.economy)
    });

    violations
}

fn check_order<T>(
    violations: &mut Vec<String>,
    table: &str,
    rows: &[T],
    cmp: impl Fn(&T, &T) -> Ordering,
) {
    if let Some(i) = rows
        .windows(2)
        .position(|pair| cmp(&pair[0], &pair[1]) == Ordering::Greater)
    {
        violations.push(format!("{}: rows {} and {} are out of order", table, i, i + 1));
    }
}
