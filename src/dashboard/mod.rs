//! The statistics dashboard: nine chart panels on one page.
//!
//! Panel order is fixed: batting averages, total runs, top scores, runs
//! distribution, boundaries, ducks, bowling averages, bowling economy,
//! fielding.

pub mod page;
pub mod panels;

pub use page::render_page;
pub use panels::{build_panels, Panel, PanelKind};

use crate::aggregator::{Summary, Thresholds};
use crate::utils::config::DashboardConfig;
use crate::utils::error::ChartError;

/// Render every panel and assemble the page
pub fn render_dashboard(
    summary: &Summary,
    thresholds: &Thresholds,
    config: &DashboardConfig,
    generated_at: &str,
) -> Result<String, ChartError> {
    let panels = build_panels(summary, thresholds, config)?;
    Ok(render_page(&panels, config, generated_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_renders_all_panels_in_order() {
        let thresholds = Thresholds::default();
        let config = DashboardConfig::default();
        let panels = build_panels(&Summary::default(), &thresholds, &config).unwrap();

        let kinds: Vec<PanelKind> = panels.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PanelKind::ORDER.to_vec());
        assert!(panels.iter().all(|p| p.svg.contains("No data")));
        assert_eq!(panels[0].title, "Batting averages (min 5 innings)");
        assert_eq!(panels[6].title, "Bowling averages (min 25 overs)");
    }

    #[test]
    fn test_page_contains_headings_and_panels() {
        let html = render_dashboard(
            &Summary::default(),
            &Thresholds::default(),
            &DashboardConfig::default(),
            "2019-09-01T00:00:00+00:00",
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Lodsworth Cricket Club Stats</h1>"));
        assert!(html.contains("Stats for the 2019 Season."));
        assert_eq!(html.matches("<svg").count(), 9);

        let first = html.find("id=\"batting-averages\"").unwrap();
        let last = html.find("id=\"fielding\"").unwrap();
        assert!(first < last);
    }
}
