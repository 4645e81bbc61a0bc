//! The nine dashboard panels and the chart each one draws.

use crate::aggregator::{Summary, Thresholds};
use crate::chart::{render_bar_chart, render_box_plot, BarMode, BoxSeries, ChartConfig, Series};
use crate::utils::config::DashboardConfig;
use crate::utils::error::ChartError;
use log::debug;

/// Dashboard panels, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    BattingAverages,
    TotalRuns,
    TopScores,
    RunsDistribution,
    Boundaries,
    Ducks,
    BowlingAverages,
    BowlingEconomy,
    Fielding,
}

impl PanelKind {
    pub const ORDER: [PanelKind; 9] = [
        PanelKind::BattingAverages,
        PanelKind::TotalRuns,
        PanelKind::TopScores,
        PanelKind::RunsDistribution,
        PanelKind::Boundaries,
        PanelKind::Ducks,
        PanelKind::BowlingAverages,
        PanelKind::BowlingEconomy,
        PanelKind::Fielding,
    ];

    /// HTML element id
    pub fn id(&self) -> &'static str {
        match self {
            PanelKind::BattingAverages => "batting-averages",
            PanelKind::TotalRuns => "total-runs",
            PanelKind::TopScores => "top-scores",
            PanelKind::RunsDistribution => "runs-distribution",
            PanelKind::Boundaries => "boundaries",
            PanelKind::Ducks => "ducks",
            PanelKind::BowlingAverages => "bowling-averages",
            PanelKind::BowlingEconomy => "bowling-economy",
            PanelKind::Fielding => "fielding",
        }
    }

    pub fn title(&self, thresholds: &Thresholds) -> String {
        match self {
            PanelKind::BattingAverages => {
                format!("Batting averages (min {} innings)", thresholds.min_bat)
            }
            PanelKind::TotalRuns => "Total runs".to_string(),
            PanelKind::TopScores => "Highest score".to_string(),
            PanelKind::RunsDistribution => {
                format!("Runs scored (min {} innings)", thresholds.min_bat)
            }
            PanelKind::Boundaries => "Boundaries".to_string(),
            PanelKind::Ducks => "Ducks".to_string(),
            PanelKind::BowlingAverages => {
                format!("Bowling averages (min {} overs)", thresholds.min_bowl)
            }
            PanelKind::BowlingEconomy => "Bowling Economy".to_string(),
            PanelKind::Fielding => "Fielding".to_string(),
        }
    }

    /// Gridline spacing
    pub fn dtick(&self) -> f64 {
        match self {
            PanelKind::BattingAverages => 5.0,
            PanelKind::TotalRuns => 25.0,
            PanelKind::TopScores => 25.0,
            PanelKind::RunsDistribution => 5.0,
            PanelKind::Boundaries => 5.0,
            PanelKind::Ducks => 1.0,
            PanelKind::BowlingAverages => 10.0,
            PanelKind::BowlingEconomy => 1.0,
            PanelKind::Fielding => 2.0,
        }
    }

    /// Only the two-series charts carry a legend
    pub fn show_legend(&self) -> bool {
        matches!(self, PanelKind::Boundaries | PanelKind::Fielding)
    }
}

/// A rendered panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub svg: String,
}

/// Render every panel, in display order
pub fn build_panels(
    summary: &Summary,
    thresholds: &Thresholds,
    config: &DashboardConfig,
) -> Result<Vec<Panel>, ChartError> {
    PanelKind::ORDER
        .iter()
        .map(|kind| {
            let title = kind.title(thresholds);
            let chart = ChartConfig::new()
                .with_title(title.clone())
                .with_size(config.chart_width, config.chart_height)
                .with_dtick(kind.dtick())
                .with_legend(kind.show_legend());
            let svg = render_panel(*kind, summary, &chart)?;
            debug!("Rendered panel {} ({} bytes)", kind.id(), svg.len());
            Ok(Panel {
                kind: *kind,
                title,
                svg,
            })
        })
        .collect()
}

fn render_panel(kind: PanelKind, summary: &Summary, chart: &ChartConfig) -> Result<String, ChartError> {
    match kind {
        PanelKind::BattingAverages => {
            let rows = &summary.batting_averages;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::new("Batting average", rows.iter().map(|r| r.average).collect()),
                chart,
            )
        }
        PanelKind::TotalRuns => {
            let rows = &summary.total_runs;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::from_counts("Total Runs", rows.iter().map(|r| r.runs)),
                chart,
            )
        }
        PanelKind::TopScores => {
            let rows = &summary.top_scores;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::from_counts("Highest score", rows.iter().map(|r| r.runs)),
                chart,
            )
        }
        PanelKind::RunsDistribution => {
            let boxes: Vec<BoxSeries> = summary
                .score_distribution
                .iter()
                .map(|r| BoxSeries::new(r.name.clone(), r.scores.iter().map(|s| f64::from(*s)).collect()))
                .collect();
            render_box_plot(&boxes, chart)
        }
        PanelKind::Boundaries => {
            let rows = &summary.boundaries;
            let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
            let series = [
                Series::from_counts("Fours", rows.iter().map(|r| r.fours)),
                Series::from_counts("Sixes", rows.iter().map(|r| r.sixes)),
            ];
            render_bar_chart(&names, &series, BarMode::Group, chart)
        }
        PanelKind::Ducks => {
            let rows = &summary.ducks;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::from_counts("Ducks", rows.iter().map(|r| r.count)),
                chart,
            )
        }
        PanelKind::BowlingAverages => {
            let rows = &summary.bowling_averages;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::new("Bowling average", rows.iter().map(|r| r.average).collect()),
                chart,
            )
        }
        PanelKind::BowlingEconomy => {
            let rows = &summary.bowling_economy;
            single_bar(
                rows.iter().map(|r| r.name.clone()).collect(),
                Series::new("Bowling economy", rows.iter().map(|r| r.economy).collect()),
                chart,
            )
        }
        PanelKind::Fielding => {
            let rows = &summary.fielding;
            let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
            let series = [
                Series::from_counts("Catches", rows.iter().map(|r| r.catches)),
                Series::from_counts("Run Outs", rows.iter().map(|r| r.run_outs)),
            ];
            render_bar_chart(&names, &series, BarMode::Stack, chart)
        }
    }
}

fn single_bar(names: Vec<String>, series: Series, chart: &ChartConfig) -> Result<String, ChartError> {
    render_bar_chart(&names, std::slice::from_ref(&series), BarMode::Group, chart)
}
