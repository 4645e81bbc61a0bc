use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Statistics API base URI (falls back to the config file)
    pub api_uri: Option<String>,

    /// Optional TOML config file
    pub config_path: Option<PathBuf>,

    /// Output path for the HTML dashboard
    pub output_html: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Chart size overrides
    pub chart_width: Option<usize>,
    pub chart_height: Option<usize>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows per table in the text summary
    pub summary_rows: usize,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            api_uri: None,
            config_path: None,
            output_html: PathBuf::from("artifacts/dashboard.html"),
            output_json: None,
            chart_width: None,
            chart_height: None,
            print_summary: false,
            summary_rows: 10,
        }
    }
}
