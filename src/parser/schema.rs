//! Typed innings records decoded from the API tables.
//!
//! A "player" is never modelled directly: rows carry the player's name and
//! the aggregator groups on it.

use serde::{Deserialize, Serialize};

/// One batting innings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingInnings {
    pub name: String,

    /// Runs scored; `None` when no score was recorded
    pub score: Option<u32>,

    pub not_out: Option<bool>,

    /// Innings contribution of this row, normally 1
    pub innings: u32,

    pub retired: Option<bool>,
    pub fours: u32,
    pub sixes: u32,
}

impl BattingInnings {
    /// Runs towards totals, an unrecorded score adding nothing
    pub fn runs(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    pub fn is_not_out(&self) -> bool {
        self.not_out.unwrap_or(false)
    }

    pub fn is_retired(&self) -> bool {
        self.retired.unwrap_or(false)
    }

    /// Out without scoring
    ///
    /// Score, not-out and retired must all be recorded as zero; a row with
    /// any of them missing is never a duck.
    pub fn is_duck(&self) -> bool {
        self.score == Some(0) && self.not_out == Some(false) && self.retired == Some(false)
    }
}

/// One bowling spell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingInnings {
    pub name: String,

    /// Completed overs
    pub overs: u32,

    /// Balls of an incomplete over
    pub balls: u32,

    /// Runs conceded
    pub runs: u32,

    pub wickets: u32,
}

/// One match's fielding record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingInnings {
    pub name: String,
    pub catches: u32,
    pub run_outs: u32,
}

/// The three decoded input tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsTables {
    pub batting: Vec<BattingInnings>,
    pub bowling: Vec<BowlingInnings>,
    pub fielding: Vec<FieldingInnings>,
}
