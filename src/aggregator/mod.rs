//! Aggregation of innings records into per-player summary tables.
//!
//! Every table is a pure function of the complete input rows:
//! - Batting: total runs, averages, score lists, ducks, top scores, boundaries
//! - Bowling: averages (qualified bowlers) and economy (all bowlers)
//! - Fielding: catches and run outs
//!
//! Grouping is done in name order and sorts are stable, so ties always come
//! out in name order and repeated runs give identical tables.

pub mod batting;
pub mod bowling;
pub mod fielding;
pub mod report;

use crate::parser::InningsTables;
use crate::utils::config::{DEFAULT_MIN_BAT, DEFAULT_MIN_BOUNDARIES, DEFAULT_MIN_BOWL};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// Re-export main types and functions
pub use batting::{batting_averages, boundaries, ducks, score_distribution, top_scores, total_runs};
pub use bowling::{bowling_averages, bowling_economy, bowling_figures};
pub use fielding::fielding_totals;
pub use report::{check_report, to_report, Report};

/// Qualification thresholds for the filtered tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum innings for batting averages and score lists
    #[serde(default = "default_min_bat")]
    pub min_bat: u32,

    /// Minimum overs for bowling averages
    #[serde(default = "default_min_bowl")]
    pub min_bowl: u32,

    /// Minimum fours for the boundaries table
    #[serde(default = "default_min_boundaries")]
    pub min_boundaries: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_bat: DEFAULT_MIN_BAT,
            min_bowl: DEFAULT_MIN_BOWL,
            min_boundaries: DEFAULT_MIN_BOUNDARIES,
        }
    }
}

fn default_min_bat() -> u32 {
    DEFAULT_MIN_BAT
}

fn default_min_bowl() -> u32 {
    DEFAULT_MIN_BOWL
}

fn default_min_boundaries() -> u32 {
    DEFAULT_MIN_BOUNDARIES
}

/// A run total for one player (total runs or top score)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRuns {
    pub name: String,
    pub runs: u64,
}

/// A count for one player (ducks)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingAverage {
    pub name: String,
    pub runs: u64,
    pub innings: u64,
    pub not_outs: u64,
    pub retired: u64,

    /// `None` when the player was never dismissed
    pub average: Option<f64>,
}

/// Individual innings scores of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreList {
    pub name: String,
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    pub name: String,
    pub fours: u64,
    pub sixes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub name: String,
    pub overs: u64,
    pub balls: u64,
    pub runs: u64,
    pub wickets: u64,

    /// Runs per six-ball over; `None` when no balls were bowled
    pub economy: Option<f64>,

    /// Runs per wicket; `None` when no wickets were taken
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingTotals {
    pub name: String,
    pub catches: u64,
    pub run_outs: u64,
}

/// Every derived table the dashboard draws
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub batting_averages: Vec<BattingAverage>,
    pub total_runs: Vec<PlayerRuns>,
    pub top_scores: Vec<PlayerRuns>,
    pub score_distribution: Vec<ScoreList>,
    pub boundaries: Vec<Boundaries>,
    pub ducks: Vec<PlayerCount>,
    pub bowling_averages: Vec<BowlingFigures>,
    pub bowling_economy: Vec<BowlingFigures>,
    pub fielding: Vec<FieldingTotals>,
}

/// Compute every summary table
///
/// **Public** - main entry point for aggregation
pub fn aggregate(tables: &InningsTables, thresholds: &Thresholds) -> Summary {
    debug!(
        "Aggregating {} batting, {} bowling, {} fielding rows with {:?}",
        tables.batting.len(),
        tables.bowling.len(),
        tables.fielding.len(),
        thresholds
    );

    let summary = Summary {
        batting_averages: batting_averages(&tables.batting, thresholds.min_bat),
        total_runs: total_runs(&tables.batting),
        top_scores: top_scores(&tables.batting),
        score_distribution: score_distribution(&tables.batting, thresholds.min_bat),
        boundaries: boundaries(&tables.batting, thresholds.min_boundaries),
        ducks: ducks(&tables.batting),
        bowling_averages: bowling_averages(&tables.bowling, thresholds.min_bowl),
        bowling_economy: bowling_economy(&tables.bowling),
        fielding: fielding_totals(&tables.fielding),
    };

    debug!(
        "Summary: {} qualified batters, {} qualified bowlers, {} fielders",
        summary.batting_averages.len(),
        summary.bowling_averages.len(),
        summary.fielding.len()
    );

    summary
}

/// Group rows by player name and fold each group into an accumulator
pub(crate) fn group_by<'a, R: 'a, A: Default>(
    rows: impl IntoIterator<Item = &'a R>,
    key: impl Fn(&'a R) -> &'a str,
    mut fold: impl FnMut(&mut A, &'a R),
) -> BTreeMap<&'a str, A> {
    let mut groups: BTreeMap<&'a str, A> = BTreeMap::new();
    for row in rows {
        fold(groups.entry(key(row)).or_default(), row);
    }
    groups
}

/// `numerator / denominator`, undefined when the denominator is zero
pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Largest first, undefined last
pub(crate) fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Smallest first, undefined last
pub(crate) fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), None);
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(10.0, 4.0), Some(2.5));
    }

    #[test]
    fn test_undefined_sorts_last_both_ways() {
        let mut values = vec![None, Some(2.0), Some(5.0), None, Some(1.0)];
        values.sort_by(|a, b| descending(*a, *b));
        assert_eq!(values, vec![Some(5.0), Some(2.0), Some(1.0), None, None]);

        values.sort_by(|a, b| ascending(*a, *b));
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(5.0), None, None]);
    }

    #[test]
    fn test_empty_tables_give_empty_summary() {
        let summary = aggregate(&InningsTables::default(), &Thresholds::default());
        assert_eq!(summary, Summary::default());
    }
}
