//! Conversion of `ColumnTable`s into typed innings rows.

use super::columnar::{parse_column_table, ColumnTable, RowView};
use super::schema::{BattingInnings, BowlingInnings, FieldingInnings, InningsTables};
use crate::api::{Discipline, RawTables};
use crate::utils::error::ParseError;
use log::{debug, info, warn};

/// A record type that can be built from one table row
pub trait FromRow: Sized {
    /// Discipline the table was fetched for
    const DISCIPLINE: Discipline;

    /// Columns that must be present for any row to be decoded
    const COLUMNS: &'static [&'static str];

    /// Build a record; `Ok(None)` skips a row that has no player name
    fn from_row(row: &RowView<'_>) -> Result<Option<Self>, ParseError>;
}

impl FromRow for BattingInnings {
    const DISCIPLINE: Discipline = Discipline::Batting;
    const COLUMNS: &'static [&'static str] = &[
        "name", "score", "not_out", "innings", "retired", "fours", "sixes",
    ];

    fn from_row(row: &RowView<'_>) -> Result<Option<Self>, ParseError> {
        let Some(name) = row.name("name")? else {
            return Ok(None);
        };
        Ok(Some(Self {
            name,
            score: row.optional_count("score")?,
            not_out: row.optional_flag("not_out")?,
            innings: row.count("innings")?,
            retired: row.optional_flag("retired")?,
            fours: row.count("fours")?,
            sixes: row.count("sixes")?,
        }))
    }
}

impl FromRow for BowlingInnings {
    const DISCIPLINE: Discipline = Discipline::Bowling;
    const COLUMNS: &'static [&'static str] = &["name", "overs", "balls", "runs", "wickets"];

    fn from_row(row: &RowView<'_>) -> Result<Option<Self>, ParseError> {
        let Some(name) = row.name("name")? else {
            return Ok(None);
        };
        Ok(Some(Self {
            name,
            overs: row.count("overs")?,
            balls: row.count("balls")?,
            runs: row.count("runs")?,
            wickets: row.count("wickets")?,
        }))
    }
}

impl FromRow for FieldingInnings {
    const DISCIPLINE: Discipline = Discipline::Fielding;
    const COLUMNS: &'static [&'static str] = &["name", "catches", "run_outs"];

    fn from_row(row: &RowView<'_>) -> Result<Option<Self>, ParseError> {
        let Some(name) = row.name("name")? else {
            return Ok(None);
        };
        Ok(Some(Self {
            name,
            catches: row.count("catches")?,
            run_outs: row.count("run_outs")?,
        }))
    }
}

/// Decode every row of a table into records
///
/// A table missing any required column decodes to no rows at all, so every
/// summary built on it comes out empty. Invalid cell values are errors.
pub fn extract_rows<T: FromRow>(table: &ColumnTable) -> Result<Vec<T>, ParseError> {
    if table.is_empty() {
        debug!("{} table is empty", T::DISCIPLINE);
        return Ok(Vec::new());
    }

    let missing: Vec<&str> = T::COLUMNS
        .iter()
        .copied()
        .filter(|column| !table.has_column(column))
        .collect();
    if !missing.is_empty() {
        warn!(
            "{} table is missing column(s) {:?}; treating it as empty",
            T::DISCIPLINE,
            missing
        );
        return Ok(Vec::new());
    }

    let mut rows = Vec::with_capacity(table.row_count());
    let mut skipped = 0usize;
    for row in table.rows() {
        match T::from_row(&row)? {
            Some(record) => rows.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} {} row(s) without a player name", skipped, T::DISCIPLINE);
    }

    Ok(rows)
}

/// Decode the three raw API responses
///
/// **Public** - main entry point for parsing
pub fn parse_tables(raw: &RawTables) -> Result<InningsTables, ParseError> {
    let batting = extract_rows(&parse_column_table(&raw.batting)?)?;
    let bowling = extract_rows(&parse_column_table(&raw.bowling)?)?;
    let fielding = extract_rows(&parse_column_table(&raw.fielding)?)?;

    info!(
        "Decoded {} batting, {} bowling and {} fielding rows",
        batting.len(),
        bowling.len(),
        fielding.len()
    );

    Ok(InningsTables {
        batting,
        bowling,
        fielding,
    })
}
