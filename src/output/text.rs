//! Terminal text summary of the aggregated tables.

use crate::aggregator::{Summary, Thresholds};
use crate::chart::format_value;
use colored::*;

/// Build a text summary showing the top `max_rows` of each leaderboard
pub fn generate_text_summary(summary: &Summary, thresholds: &Thresholds, max_rows: usize) -> String {
    let mut lines = Vec::new();

    section(
        &mut lines,
        &format!("BATTING AVERAGES (min {} innings)", thresholds.min_bat),
        summary.batting_averages.len(),
        summary.batting_averages.iter().take(max_rows).map(|r| {
            (
                r.name.as_str(),
                format!(
                    "{:>8}  ({} runs, {} inns, {} n.o.)",
                    format_ratio(r.average),
                    r.runs,
                    r.innings,
                    r.not_outs
                ),
            )
        }),
    );
    section(
        &mut lines,
        "TOTAL RUNS",
        summary.total_runs.len(),
        summary
            .total_runs
            .iter()
            .take(max_rows)
            .map(|r| (r.name.as_str(), format!("{:>8}", r.runs))),
    );
    section(
        &mut lines,
        "HIGHEST SCORE",
        summary.top_scores.len(),
        summary
            .top_scores
            .iter()
            .take(max_rows)
            .map(|r| (r.name.as_str(), format!("{:>8}", r.runs))),
    );
    section(
        &mut lines,
        &format!("BOUNDARIES (min {} fours)", thresholds.min_boundaries),
        summary.boundaries.len(),
        summary.boundaries.iter().take(max_rows).map(|r| {
            (
                r.name.as_str(),
                format!("{:>8} fours {:>4} sixes", r.fours, r.sixes),
            )
        }),
    );
    section(
        &mut lines,
        "DUCKS",
        summary.ducks.len(),
        summary
            .ducks
            .iter()
            .take(max_rows)
            .map(|r| (r.name.as_str(), format!("{:>8}", r.count))),
    );
    section(
        &mut lines,
        &format!("BOWLING AVERAGES (min {} overs)", thresholds.min_bowl),
        summary.bowling_averages.len(),
        summary.bowling_averages.iter().take(max_rows).map(|r| {
            (
                r.name.as_str(),
                format!(
                    "{:>8}  ({} wkts for {} in {}.{} overs)",
                    format_ratio(r.average),
                    r.wickets,
                    r.runs,
                    r.overs,
                    r.balls
                ),
            )
        }),
    );
    section(
        &mut lines,
        "BOWLING ECONOMY",
        summary.bowling_economy.len(),
        summary
            .bowling_economy
            .iter()
            .take(max_rows)
            .map(|r| (r.name.as_str(), format!("{:>8}", format_ratio(r.economy)))),
    );
    section(
        &mut lines,
        "FIELDING",
        summary.fielding.len(),
        summary.fielding.iter().take(max_rows).map(|r| {
            (
                r.name.as_str(),
                format!("{:>8} catches {:>4} run outs", r.catches, r.run_outs),
            )
        }),
    );

    lines.join("\n")
}

fn section<'a>(
    lines: &mut Vec<String>,
    heading: &str,
    total: usize,
    rows: impl Iterator<Item = (&'a str, String)>,
) {
    lines.push(format!("  {}", heading.bold().cyan()));

    let mut shown = 0;
    for (name, detail) in rows {
        lines.push(format!("    {:<24} {}", name, detail));
        shown += 1;
    }

    if total == 0 {
        lines.push(format!("    {}", "(no qualifying players)".dimmed()));
    } else if shown < total {
        lines.push(format!(
            "    {}",
            format!("(showing {} of {})", shown, total).dimmed()
        ));
    }
    lines.push(String::new());
}

/// Undefined ratios print as a dash
fn format_ratio(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| "-".to_string())
}
