use super::{group_by, FieldingTotals};
use crate::parser::FieldingInnings;

/// Catches and run outs per player, most catches first
pub fn fielding_totals(rows: &[FieldingInnings]) -> Vec<FieldingTotals> {
    let mut table: Vec<FieldingTotals> =
        group_by(rows, |row| row.name.as_str(), |t: &mut FieldingTotals, row| {
            t.catches += u64::from(row.catches);
            t.run_outs += u64::from(row.run_outs);
        })
        .into_iter()
        .map(|(name, mut totals)| {
            totals.name = name.to_string();
            totals
        })
        .collect();
    table.sort_by(|a, b| b.catches.cmp(&a.catches));
    table
}
