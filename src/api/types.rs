//! Types for talking to the statistics API.

use std::fmt;

/// Value of the `discipline` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Batting,
    Bowling,
    Fielding,
}

impl Discipline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Batting => "batting",
            Discipline::Bowling => "bowling",
            Discipline::Fielding => "fielding",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw table JSON as returned by the API (decoded later by the parser)
///
/// Kept as `serde_json::Value` because the API may return any of the
/// dataframe JSON orientations the parser understands.
pub type RawTable = serde_json::Value;

/// The three raw responses, one per discipline
#[derive(Debug, Clone)]
pub struct RawTables {
    pub batting: RawTable,
    pub bowling: RawTable,
    pub fielding: RawTable,
}
