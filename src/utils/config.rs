//! Configuration and constants for the CLI.
//!
//! Every setting has a built-in default; an optional TOML file can override
//! any of them:
//!
//! ```toml
//! [api]
//! uri = "https://stats.example.com/api"
//! timeout_secs = 30
//!
//! [thresholds]
//! min_bat = 5
//! min_bowl = 25
//! min_boundaries = 2
//!
//! [dashboard]
//! title = "Lodsworth Cricket Club Stats"
//! subtitle = "Stats for the 2019 Season."
//! chart_width = 900
//! chart_height = 450
//! ```

use crate::aggregator::Thresholds;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Environment variable holding the statistics API base URI
pub const API_URI_ENV: &str = "API_URI";

/// Minimum innings for the batting tables
pub const DEFAULT_MIN_BAT: u32 = 5;

/// Minimum overs for the bowling average table
pub const DEFAULT_MIN_BOWL: u32 = 25;

/// Minimum fours for the boundaries table
pub const DEFAULT_MIN_BOUNDARIES: u32 = 2;

pub const DEFAULT_CHART_WIDTH: usize = 900;
pub const DEFAULT_CHART_HEIGHT: usize = 450;

pub const DEFAULT_DASHBOARD_TITLE: &str = "Lodsworth Cricket Club Stats";
pub const DEFAULT_DASHBOARD_SUBTITLE: &str = "Stats for the 2019 Season.";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Statistics API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URI; the CLI flag or `API_URI` take precedence
    #[serde(default)]
    pub uri: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            uri: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT.as_secs()
}

/// Page text and chart size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_DASHBOARD_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_DASHBOARD_SUBTITLE.to_string()
}

fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}

fn default_chart_height() -> usize {
    DEFAULT_CHART_HEIGHT
}

/// Load configuration from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - File cannot be read
/// * `ConfigError::ParseFailed` - TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.thresholds.min_bat, DEFAULT_MIN_BAT);
        assert_eq!(config.api.timeout(), DEFAULT_API_TIMEOUT);
        assert_eq!(config.dashboard.title, DEFAULT_DASHBOARD_TITLE);
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            uri = "http://localhost:8000/stats"

            [thresholds]
            min_bowl = 10

            [dashboard]
            subtitle = "Stats for the 2020 Season."
            "#,
        )
        .unwrap();

        assert_eq!(config.api.uri.as_deref(), Some("http://localhost:8000/stats"));
        assert_eq!(config.thresholds.min_bowl, 10);
        assert_eq!(config.thresholds.min_bat, DEFAULT_MIN_BAT);
        assert_eq!(config.dashboard.subtitle, "Stats for the 2020 Season.");
        assert_eq!(config.dashboard.chart_width, DEFAULT_CHART_WIDTH);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/cricket-stats.toml");
        assert!(matches!(result, Err(ConfigError::ReadFailed(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[thresholds\nmin_bat = ").unwrap();
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }
}
