//! Build command implementation.
//!
//! The build command:
//! 1. Loads configuration
//! 2. Fetches the batting, bowling and fielding tables
//! 3. Decodes them into innings records
//! 4. Aggregates the summary tables
//! 5. Renders the dashboard
//! 6. Writes output files

use super::models::BuildArgs;
use crate::aggregator::{aggregate, to_report, Report};
use crate::api::{RawTables, StatsClient};
use crate::chart::frame::{MIN_HEIGHT, MIN_WIDTH};
use crate::dashboard::render_dashboard;
use crate::output::{generate_text_summary, write_html, write_report};
use crate::parser::parse_tables;
use crate::utils::config::{load_config, AppConfig, API_URI_ENV};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Result of running the pipeline on fetched tables
///
/// The report and the dashboard footer carry the same timestamp.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub report: Report,
    pub html: String,
}

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// Any configuration, fetch, decode, render or write failure; nothing is
/// retried.
pub fn execute_build(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Configuration
    info!("Step 1/6: Loading configuration...");
    let mut config = match &args.config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => AppConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let api_uri = resolve_api_uri(&args, &config)?;
    validate_api_uri(&api_uri)?;
    info!("Statistics API: {}", api_uri);

    // Step 2: Fetch
    info!("Step 2/6: Fetching statistics...");
    let raw = fetch_tables(&api_uri, config.api.timeout())
        .context("Failed to fetch statistics from API")?;

    // Steps 3-5
    let generated_at = chrono::Utc::now().to_rfc3339();
    let output = run_pipeline(&raw, &config, &generated_at)?;

    // Step 6: Write outputs
    info!("Step 6/6: Writing output files...");
    write_html(&output.html, &args.output_html).context("Failed to write dashboard HTML")?;
    info!("✓ Dashboard written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        write_report(&output.report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", config.dashboard.title.to_uppercase());
        println!("{}", "=".repeat(80));
        println!(
            "{}",
            generate_text_summary(&output.report.summary, &config.thresholds, args.summary_rows)
        );
        println!("{}", "=".repeat(80));
    }

    info!("Build completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Decode, aggregate and render already-fetched tables
///
/// **Public** - the network-free part of the build, also used by tests
pub fn run_pipeline(raw: &RawTables, config: &AppConfig, generated_at: &str) -> Result<BuildOutput> {
    info!("Step 3/6: Decoding tables...");
    let tables = parse_tables(raw).context("Failed to decode statistics tables")?;

    info!("Step 4/6: Aggregating player statistics...");
    let summary = aggregate(&tables, &config.thresholds);
    debug!(
        "{} batters, {} qualified averages, {} bowlers, {} fielders",
        summary.total_runs.len(),
        summary.batting_averages.len(),
        summary.bowling_economy.len(),
        summary.fielding.len()
    );

    info!("Step 5/6: Rendering dashboard...");
    let html = render_dashboard(&summary, &config.thresholds, &config.dashboard, generated_at)
        .context("Failed to render dashboard")?;

    let report = to_report(summary, config.thresholds, generated_at);
    Ok(BuildOutput { report, html })
}

/// Fetch the three tables from the API
///
/// **Private** - internal helper for execute_build
fn fetch_tables(api_uri: &str, timeout: Duration) -> Result<RawTables> {
    let client =
        StatsClient::with_timeout(api_uri, timeout).context("Failed to create API client")?;

    let raw = client
        .fetch_all()
        .with_context(|| format!("Failed to fetch tables from {}", client.base_uri()))?;

    Ok(raw)
}

fn apply_overrides(config: &mut AppConfig, args: &BuildArgs) {
    if let Some(width) = args.chart_width {
        config.dashboard.chart_width = width;
    }
    if let Some(height) = args.chart_height {
        config.dashboard.chart_height = height;
    }
}

/// CLI/env value first, then the config file
fn resolve_api_uri(args: &BuildArgs, config: &AppConfig) -> Result<String> {
    args.api_uri
        .clone()
        .or_else(|| config.api.uri.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Statistics API URI not set: pass --api-uri, set {}, or add `uri` under [api] in the config file",
                API_URI_ENV
            )
        })
}

/// Validate the API base URI
pub fn validate_api_uri(api_uri: &str) -> Result<()> {
    if api_uri.is_empty() {
        anyhow::bail!("API URI cannot be empty");
    }

    if !api_uri.starts_with("http://") && !api_uri.starts_with("https://") {
        anyhow::bail!("API URI must start with http:// or https://");
    }

    Ok(())
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if let Some(api_uri) = &args.api_uri {
        validate_api_uri(api_uri)?;
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(width) = args.chart_width {
        if width < MIN_WIDTH {
            anyhow::bail!("Chart width must be at least {} pixels", MIN_WIDTH);
        }
    }

    if let Some(height) = args.chart_height {
        if height < MIN_HEIGHT {
            anyhow::bail!("Chart height must be at least {} pixels", MIN_HEIGHT);
        }
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    Ok(())
}
