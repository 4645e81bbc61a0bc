use cricket_stats::aggregator::{aggregate, Thresholds};
use cricket_stats::chart::box_plot::BoxStats;
use cricket_stats::chart::frame::axis_range;
use cricket_stats::chart::{
    escape_xml, format_value, render_bar_chart, render_box_plot, BarMode, BoxSeries, ChartConfig,
    Series,
};
use cricket_stats::dashboard::{build_panels, render_dashboard, PanelKind};
use cricket_stats::parser::{BattingInnings, InningsTables};
use cricket_stats::utils::config::DashboardConfig;
use cricket_stats::utils::error::ChartError;

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(25.0), "25");
    assert_eq!(format_value(23.75), "23.75");
    assert_eq!(format_value(20.0 / 3.0), "6.67");
}

#[test]
fn test_escape_xml() {
    assert_eq!(escape_xml("O'Neil & <Sons>"), "O&#39;Neil &amp; &lt;Sons&gt;");
}

#[test]
fn test_axis_range_rounds_up_to_tick() {
    assert_eq!(axis_range(23.0, 5.0), (25.0, 5.0));
    assert_eq!(axis_range(0.0, 5.0), (5.0, 5.0));
}

#[test]
fn test_box_stats() {
    let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(stats.median, 3.0);
    assert_eq!(stats.q1, 2.0);
    assert_eq!(stats.q3, 4.0);
    assert_eq!(stats.mean, 3.0);
    assert!(BoxStats::from_values(&[]).is_none());
}

#[test]
fn test_grouped_bars_with_legend() {
    let svg = render_bar_chart(
        &categories(&["Smith", "Jones"]),
        &[
            Series::from_counts("Fours", vec![12, 11]),
            Series::from_counts("Sixes", vec![1, 3]),
        ],
        BarMode::Group,
        &ChartConfig::new().with_title("Boundaries").with_legend(true),
    )
    .unwrap();

    assert_eq!(svg.matches("<title>").count(), 4);
    assert!(svg.contains("Boundaries"));
    assert!(svg.contains(">Fours<"));
    assert!(svg.contains(">Sixes<"));
}

#[test]
fn test_too_small_chart_rejected() {
    let result = render_bar_chart(
        &categories(&["A"]),
        &[Series::from_counts("Runs", vec![10])],
        BarMode::Group,
        &ChartConfig::new().with_size(50, 50),
    );
    assert!(matches!(result, Err(ChartError::InvalidDimensions { .. })));
}

#[test]
fn test_box_plot_one_box_per_player() {
    let svg = render_box_plot(
        &[
            BoxSeries::new("Smith", vec![12.0, 45.0, 0.0, 30.0, 8.0]),
            BoxSeries::new("Jones", vec![60.0, 0.0, 0.0, 22.0, 17.0, 5.0]),
        ],
        &ChartConfig::new().with_title("Runs scored"),
    )
    .unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Smith: median"));
    assert!(svg.contains("Jones: median"));
    assert_eq!(svg.matches("<circle").count(), 11);
}

#[test]
fn test_dashboard_panels_follow_summary() {
    let batting: Vec<BattingInnings> = (0..5)
        .map(|i| BattingInnings {
            name: "Smith".to_string(),
            score: Some(10 * i),
            not_out: Some(false),
            innings: 1,
            retired: Some(false),
            fours: 1,
            sixes: 0,
        })
        .collect();
    let tables = InningsTables {
        batting,
        ..Default::default()
    };
    let thresholds = Thresholds::default();
    let summary = aggregate(&tables, &thresholds);

    let panels = build_panels(&summary, &thresholds, &DashboardConfig::default()).unwrap();
    assert_eq!(panels.len(), 9);

    let averages = &panels[0];
    assert_eq!(averages.kind, PanelKind::BattingAverages);
    assert!(!averages.svg.contains("No data"));

    let bowling = panels
        .iter()
        .find(|p| p.kind == PanelKind::BowlingAverages)
        .unwrap();
    assert!(bowling.svg.contains("No data"));

    let html = render_dashboard(
        &summary,
        &thresholds,
        &DashboardConfig::default(),
        "2019-09-01T00:00:00+00:00",
    )
    .unwrap();
    assert!(html.contains("Smith"));
    assert!(html.contains("2019-09-01T00:00:00+00:00"));
}
