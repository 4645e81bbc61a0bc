use crate::aggregator::check_report;
use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

/// Validate a report JSON file
///
/// Fails when the file cannot be read or when any table breaks its
/// threshold or sort order.
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let s = &report.summary;

    println!("{} Valid report JSON", "✓".green());
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!(
        "  Thresholds: min_bat={} min_bowl={} min_boundaries={}",
        report.thresholds.min_bat, report.thresholds.min_bowl, report.thresholds.min_boundaries
    );
    println!("  Batters: {} ({} qualified)", s.total_runs.len(), s.batting_averages.len());
    println!(
        "  Bowlers: {} ({} qualified)",
        s.bowling_economy.len(),
        s.bowling_averages.len()
    );
    println!("  Fielders: {}", s.fielding.len());

    let violations = check_report(&report);
    if violations.is_empty() {
        println!("{} All tables respect their thresholds and ordering", "✓".green());
        return Ok(());
    }

    for violation in &violations {
        println!("  {} {}", "✗".red(), violation);
    }
    anyhow::bail!("Report has {} violation(s)", violations.len())
}

/// Display version information
pub fn display_version() {
    println!("Cricket Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Fetches club cricket innings records and renders a statistics dashboard.");
}
