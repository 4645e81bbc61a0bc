//! Table parsing and input record definitions.
//!
//! This module handles:
//! - Normalising the API's column-oriented JSON into a `ColumnTable`
//! - Decoding rows into batting, bowling and fielding records

pub mod columnar;
pub mod innings;
pub mod schema;

// Re-export main types
pub use columnar::{parse_column_table, parse_column_table_str, ColumnTable, RowView};
pub use innings::{extract_rows, parse_tables, FromRow};
pub use schema::{BattingInnings, BowlingInnings, FieldingInnings, InningsTables};
