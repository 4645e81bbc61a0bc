//! Cricket Stats
//!
//! Fetches a club's batting, bowling and fielding innings records from a
//! statistics API, aggregates them into per-player tables and renders a
//! single-page chart dashboard.
//!
//! Pipeline: `api` → `parser` → `aggregator` → `dashboard`/`chart` → `output`.

pub mod aggregator;
pub mod api;
pub mod chart;
pub mod commands;
pub mod dashboard;
pub mod output;
pub mod parser;
pub mod utils;
