//! Blocking HTTP client for the statistics API.

use super::types::{Discipline, RawTable, RawTables};
use crate::utils::config::DEFAULT_API_TIMEOUT;
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Client for the statistics endpoint
///
/// One base URI is queried once per discipline with
/// `?discipline=batting|bowling|fielding`.
pub struct StatsClient {
    client: Client,
    base_uri: String,
}

impl StatsClient {
    /// Create a new client with the default timeout
    pub fn new(base_uri: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_uri, DEFAULT_API_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(base_uri: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_uri: base_uri.into(),
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Fetch the raw table for one discipline
    pub fn fetch_table(&self, discipline: Discipline) -> Result<RawTable, ApiError> {
        info!("Fetching {} records", discipline);

        let response = self
            .client
            .get(&self.base_uri)
            .query(&[("discipline", discipline.as_str())])
            .send()
            .map_err(ApiError::RequestFailed)?;

        debug!("GET {} -> {}", response.url(), response.status());

        if !response.status().is_success() {
            return Err(ApiError::InvalidResponse(format!(
                "HTTP {} for discipline {}: {}",
                response.status(),
                discipline,
                response.text().unwrap_or_default()
            )));
        }

        response.json().map_err(ApiError::RequestFailed)
    }

    /// Fetch all three tables, sequentially
    ///
    /// The first failure aborts the whole fetch.
    pub fn fetch_all(&self) -> Result<RawTables, ApiError> {
        Ok(RawTables {
            batting: self.fetch_table(Discipline::Batting)?,
            bowling: self.fetch_table(Discipline::Bowling)?,
            fielding: self.fetch_table(Discipline::Fielding)?,
        })
    }
}
