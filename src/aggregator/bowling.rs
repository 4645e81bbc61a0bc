//! Bowling summaries: averages and economy rates.

use super::{ascending, group_by, ratio, BowlingFigures};
use crate::parser::BowlingInnings;

/// Summed bowling figures per player, in name order
///
/// economy = runs / ((overs * 6 + balls) / 6), average = runs / wickets;
/// either is undefined when its denominator is zero.
pub fn bowling_figures(rows: &[BowlingInnings]) -> Vec<BowlingFigures> {
    group_by(rows, |row| row.name.as_str(), |f: &mut BowlingFigures, row| {
        f.overs += u64::from(row.overs);
        f.balls += u64::from(row.balls);
        f.runs += u64::from(row.runs);
        f.wickets += u64::from(row.wickets);
    })
    .into_iter()
    .map(|(name, mut figures)| {
        let overs_bowled = (figures.overs * 6 + figures.balls) as f64 / 6.0;
        figures.name = name.to_string();
        figures.economy = ratio(figures.runs as f64, overs_bowled);
        figures.average = ratio(figures.runs as f64, figures.wickets as f64);
        figures
    })
    .collect()
}

/// Bowlers with at least `min_bowl` overs, lowest average first
pub fn bowling_averages(rows: &[BowlingInnings], min_bowl: u32) -> Vec<BowlingFigures> {
    let mut table: Vec<BowlingFigures> = bowling_figures(rows)
        .into_iter()
        .filter(|figures| figures.overs >= u64::from(min_bowl))
        .collect();
    table.sort_by(|a, b| ascending(a.average, b.average));
    table
}

/// Every bowler, lowest economy first
pub fn bowling_economy(rows: &[BowlingInnings]) -> Vec<BowlingFigures> {
    let mut table = bowling_figures(rows);
    table.sort_by(|a, b| ascending(a.economy, b.economy));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(name: &str, overs: u32, balls: u32, runs: u32, wickets: u32) -> BowlingInnings {
        BowlingInnings {
            name: name.to_string(),
            overs,
            balls,
            runs,
            wickets,
        }
    }

    #[test]
    fn test_economy_counts_part_overs() {
        // 3.3 overs = 21 balls = 3.5 overs
        let table = bowling_economy(&[spell("A", 3, 3, 21, 1)]);
        assert_eq!(table[0].economy, Some(6.0));
        assert_eq!(table[0].average, Some(21.0));
    }

    #[test]
    fn test_wicketless_bowler_has_undefined_average() {
        let table = bowling_averages(&[spell("A", 30, 0, 120, 0), spell("B", 30, 0, 150, 5)], 25);
        assert_eq!(table[0].name, "B");
        assert_eq!(table[0].average, Some(30.0));
        assert_eq!(table[1].name, "A");
        assert_eq!(table[1].average, None);
    }

    #[test]
    fn test_no_balls_bowled_has_undefined_economy() {
        let table = bowling_economy(&[spell("A", 0, 0, 0, 0), spell("B", 4, 0, 20, 0)]);
        assert_eq!(table[0].name, "B");
        assert_eq!(table[0].economy, Some(5.0));
        assert_eq!(table[1].economy, None);
    }
}
