use cricket_stats::aggregator::{to_report, Thresholds};
use cricket_stats::api::RawTables;
use cricket_stats::commands::{run_pipeline, validate_args, validate_report_file, BuildArgs};
use cricket_stats::output::write_report;
use cricket_stats::utils::config::AppConfig;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;
use tempfile::tempdir;

fn raw_tables() -> RawTables {
    RawTables {
        batting: json!({
            "name": {"0": "Smith", "1": "Smith", "2": "Smith", "3": "Smith", "4": "Smith", "5": "Jones"},
            "score": {"0": 12, "1": 45, "2": 0, "3": 30, "4": 8, "5": 60},
            "not_out": {"0": 0, "1": 0, "2": 0, "3": 1, "4": 0, "5": 0},
            "innings": {"0": 1, "1": 1, "2": 1, "3": 1, "4": 1, "5": 1},
            "retired": {"0": 0, "1": 0, "2": 0, "3": 0, "4": 0, "5": 0},
            "fours": {"0": 2, "1": 6, "2": 0, "3": 3, "4": 1, "5": 8},
            "sixes": {"0": 0, "1": 1, "2": 0, "3": 0, "4": 0, "5": 2}
        }),
        bowling: json!({
            "name": ["Khan", "Khan"],
            "overs": [10, 16],
            "balls": [0, 3],
            "runs": [40, 62],
            "wickets": [2, 4]
        }),
        fielding: json!([
            {"name": "Smith", "catches": 2, "run_outs": 0},
            {"name": "Jones", "catches": 1, "run_outs": 1}
        ]),
    }
}

#[test]
fn test_validate_args_valid() {
    let args = BuildArgs {
        api_uri: Some("http://localhost:5000/stats".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_without_uri() {
    // The URI may still come from the config file
    assert!(validate_args(&BuildArgs::default()).is_ok());
}

#[test]
fn test_validate_args_empty_uri() {
    let args = BuildArgs {
        api_uri: Some(String::new()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_invalid_uri_scheme() {
    let args = BuildArgs {
        api_uri: Some("ftp://localhost:5000/stats".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_small_chart() {
    let args = BuildArgs {
        chart_width: Some(100),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_output() {
    let args = BuildArgs {
        output_html: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_run_pipeline() {
    let output = run_pipeline(&raw_tables(), &AppConfig::default(), "2019-09-01T00:00:00Z").unwrap();

    let totals: Vec<(&str, u64)> = output
        .report
        .summary
        .total_runs
        .iter()
        .map(|p| (p.name.as_str(), p.runs))
        .collect();
    assert_eq!(totals, vec![("Smith", 95), ("Jones", 60)]);

    assert_eq!(output.report.summary.batting_averages.len(), 1);
    assert_eq!(output.report.summary.batting_averages[0].average, Some(23.75));
    assert_eq!(output.report.summary.bowling_averages.len(), 1);
    assert_eq!(output.report.summary.bowling_averages[0].average, Some(17.0));
    assert_eq!(output.report.summary.fielding[0].name, "Smith");

    assert!(output.html.starts_with("<!DOCTYPE html>"));
    assert_eq!(output.html.matches("<svg").count(), 9);
}

#[test]
fn test_report_and_dashboard_share_timestamp() {
    let stamp = "2019-09-01T12:30:00+00:00";
    let output = run_pipeline(&raw_tables(), &AppConfig::default(), stamp).unwrap();

    assert_eq!(output.report.generated_at, stamp);
    assert_eq!(output.report.thresholds, Thresholds::default());
    assert!(output.html.contains(&format!("Generated {}", stamp)));
}

#[test]
fn test_run_pipeline_rejects_bad_values() {
    let mut raw = raw_tables();
    raw.fielding = json!([{"name": "Smith", "catches": "lots", "run_outs": 0}]);

    assert!(run_pipeline(&raw, &AppConfig::default(), "now").is_err());
}

#[test]
fn test_validate_report_file() {
    let output = run_pipeline(&raw_tables(), &AppConfig::default(), "now").unwrap();
    let dir = tempdir().unwrap();

    let good = dir.path().join("good.json");
    write_report(&output.report, &good).unwrap();
    assert!(validate_report_file(good).is_ok());

    // The same tables judged against stricter thresholds
    let strict = Thresholds {
        min_bat: 10,
        ..Thresholds::default()
    };
    let bad = dir.path().join("bad.json");
    write_report(&to_report(output.report.summary, strict, "now"), &bad).unwrap();
    assert!(validate_report_file(bad).is_err());
}
