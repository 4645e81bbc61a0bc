//! HTTP client for the cricket statistics API.

pub mod client;
pub mod types;

// Re-export main types
pub use client::StatsClient;
pub use types::{Discipline, RawTable, RawTables};
