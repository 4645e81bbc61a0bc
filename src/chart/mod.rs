//! SVG chart rendering.
//!
//! Charts are written as standalone SVG strings with no scripting, so the
//! dashboard page works from a plain file:
//! - Bar charts (single series, grouped or stacked)
//! - Box plots, one box per player with every point drawn

pub mod bar;
pub mod box_plot;
pub mod frame;

// Re-export main types
pub use bar::{render_bar_chart, BarMode, Series};
pub use box_plot::{render_box_plot, BoxSeries, BoxStats};

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

/// Series colours, in order of use
pub const COLORWAY: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Colour for the n-th series, cycling through the colourway
pub fn series_color(index: usize) -> &'static str {
    COLORWAY[index % COLORWAY.len()]
}

/// Chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,

    /// Spacing between horizontal gridlines, in data units
    pub dtick: f64,

    pub show_legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            dtick: 5.0,
            show_legend: false,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_dtick(mut self, dtick: f64) -> Self {
        self.dtick = dtick;
        self
    }

    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }
}

/// Escape text for use inside SVG/HTML content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a value for labels: integers without decimals, others to 2 places
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}
