//! Batting summaries: runs, averages, ducks, top scores and boundaries.

use super::{descending, group_by, ratio, BattingAverage, Boundaries, PlayerCount, PlayerRuns, ScoreList};
use crate::parser::BattingInnings;
use std::collections::BTreeMap;

/// Per-player sums over every batting row
#[derive(Debug, Default)]
struct BattingTotals {
    runs: u64,
    innings: u64,
    not_outs: u64,
    retired: u64,
    fours: u64,
    sixes: u64,

    /// `None` until a recorded score is seen
    top_score: Option<u32>,
}

fn batting_totals(rows: &[BattingInnings]) -> BTreeMap<&str, BattingTotals> {
    group_by(rows, |row| row.name.as_str(), |totals: &mut BattingTotals, row| {
        totals.runs += u64::from(row.runs());
        totals.innings += u64::from(row.innings);
        totals.not_outs += u64::from(row.is_not_out());
        totals.retired += u64::from(row.is_retired());
        totals.fours += u64::from(row.fours);
        totals.sixes += u64::from(row.sixes);
        totals.top_score = totals.top_score.max(row.score);
    })
}

/// Total runs per player, highest first
pub fn total_runs(rows: &[BattingInnings]) -> Vec<PlayerRuns> {
    let mut table: Vec<PlayerRuns> = batting_totals(rows)
        .into_iter()
        .map(|(name, totals)| PlayerRuns {
            name: name.to_string(),
            runs: totals.runs,
        })
        .collect();
    table.sort_by(|a, b| b.runs.cmp(&a.runs));
    table
}

/// Batting averages for players with at least `min_bat` innings, best first
///
/// average = runs / (innings - not outs - retired). A zero denominator gives
/// an undefined average, listed last.
pub fn batting_averages(rows: &[BattingInnings], min_bat: u32) -> Vec<BattingAverage> {
    let mut table: Vec<BattingAverage> = batting_totals(rows)
        .into_iter()
        .filter(|(_, totals)| totals.innings >= u64::from(min_bat))
        .map(|(name, totals)| {
            let dismissals =
                totals.innings as i64 - totals.not_outs as i64 - totals.retired as i64;
            BattingAverage {
                name: name.to_string(),
                runs: totals.runs,
                innings: totals.innings,
                not_outs: totals.not_outs,
                retired: totals.retired,
                average: ratio(totals.runs as f64, dismissals as f64),
            }
        })
        .collect();
    table.sort_by(|a, b| descending(a.average, b.average));
    table
}

/// Individual scores of every player with at least `min_bat` innings
///
/// Players are ordered by total runs (highest first); each list keeps the
/// original row order and leaves out unrecorded scores.
pub fn score_distribution(rows: &[BattingInnings], min_bat: u32) -> Vec<ScoreList> {
    let totals = batting_totals(rows);
    let mut qualified: Vec<(&str, u64)> = totals
        .iter()
        .filter(|(_, t)| t.innings >= u64::from(min_bat))
        .map(|(name, t)| (*name, t.runs))
        .collect();
    qualified.sort_by(|a, b| b.1.cmp(&a.1));

    qualified
        .into_iter()
        .map(|(name, _)| ScoreList {
            name: name.to_string(),
            scores: rows
                .iter()
                .filter(|row| row.name == name)
                .filter_map(|row| row.score)
                .collect(),
        })
        .collect()
}

/// Ducks per player (innings summed over duck rows), most first
///
/// Players who never made a duck are absent.
pub fn ducks(rows: &[BattingInnings]) -> Vec<PlayerCount> {
    let duck_rows: Vec<&BattingInnings> = rows.iter().filter(|row| row.is_duck()).collect();
    let counts: BTreeMap<&str, u64> = group_by(
        duck_rows.iter().copied(),
        |row| row.name.as_str(),
        |count: &mut u64, row| *count += u64::from(row.innings),
    );

    let mut table: Vec<PlayerCount> = counts
        .into_iter()
        .map(|(name, count)| PlayerCount {
            name: name.to_string(),
            count,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Highest single-innings score per player, highest first
///
/// Players with no recorded score are absent.
pub fn top_scores(rows: &[BattingInnings]) -> Vec<PlayerRuns> {
    let mut table: Vec<PlayerRuns> = batting_totals(rows)
        .into_iter()
        .filter_map(|(name, totals)| {
            totals.top_score.map(|top| PlayerRuns {
                name: name.to_string(),
                runs: u64::from(top),
            })
        })
        .collect();
    table.sort_by(|a, b| b.runs.cmp(&a.runs));
    table
}

/// Fours and sixes for players with at least `min_boundaries` fours, most fours first
pub fn boundaries(rows: &[BattingInnings], min_boundaries: u32) -> Vec<Boundaries> {
    let mut table: Vec<Boundaries> = batting_totals(rows)
        .into_iter()
        .filter(|(_, totals)| totals.fours >= u64::from(min_boundaries))
        .map(|(name, totals)| Boundaries {
            name: name.to_string(),
            fours: totals.fours,
            sixes: totals.sixes,
        })
        .collect();
    table.sort_by(|a, b| b.fours.cmp(&a.fours));
    table
}
