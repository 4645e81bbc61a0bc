//! Bar charts: single series, grouped and stacked.

use super::frame::Frame;
use super::{escape_xml, format_value, series_color, ChartConfig};
use crate::utils::error::ChartError;
use log::debug;

/// Fraction of each category slot left empty between bar groups
const BAR_GAP: f64 = 0.2;

/// How several series share a category slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Side by side
    Group,
    /// On top of each other
    Stack,
}

/// One named series of values, aligned with the chart's categories
///
/// `None` values (undefined statistics) leave their bar out.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Series from plain counts
    pub fn from_counts(name: impl Into<String>, counts: impl IntoIterator<Item = u64>) -> Self {
        Self::new(name, counts.into_iter().map(|c| Some(c as f64)).collect())
    }
}

/// Render a bar chart as SVG
///
/// # Errors
/// * `ChartError::SeriesLengthMismatch` - A series does not have one value per category
/// * `ChartError::InvalidDimensions` - Configured size is too small to draw in
pub fn render_bar_chart(
    categories: &[String],
    series: &[Series],
    mode: BarMode,
    config: &ChartConfig,
) -> Result<String, ChartError> {
    for s in series {
        if s.values.len() != categories.len() {
            return Err(ChartError::SeriesLengthMismatch {
                series: s.name.clone(),
                expected: categories.len(),
                actual: s.values.len(),
            });
        }
    }

    let frame = Frame::new(config, data_max(categories.len(), series, mode))?;
    debug!(
        "Rendering bar chart '{}': {} categories x {} series",
        config.title,
        categories.len(),
        series.len()
    );

    let mut svg = String::new();
    frame.open(&mut svg, &config.title);

    if categories.is_empty() || series.is_empty() {
        frame.no_data(&mut svg);
    } else {
        let slot = frame.slot_width(categories.len());
        let group_width = slot * (1.0 - BAR_GAP);

        for (i, category) in categories.iter().enumerate() {
            let x0 = frame.left + i as f64 * slot + (slot - group_width) / 2.0;
            let mut base = 0.0;

            for (j, s) in series.iter().enumerate() {
                let Some(value) = s.values[i] else {
                    continue;
                };

                let (x, width, low, high) = match mode {
                    BarMode::Group => {
                        let width = group_width / series.len() as f64;
                        (x0 + j as f64 * width, width, 0.0, value)
                    }
                    BarMode::Stack => {
                        let low = base;
                        base += value.max(0.0);
                        (x0, group_width, low, base)
                    }
                };

                let y_top = frame.y(high);
                let height = frame.y(low) - y_top;
                svg.push_str(&format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {} {}</title></rect>"#,
                    x,
                    y_top,
                    width,
                    height,
                    series_color(j),
                    escape_xml(category),
                    escape_xml(&s.name),
                    format_value(value)
                ));
            }
        }

        frame.x_labels(&mut svg, categories);
    }

    if config.show_legend {
        let entries: Vec<(&str, &str)> = series
            .iter()
            .enumerate()
            .map(|(j, s)| (s.name.as_str(), series_color(j)))
            .collect();
        frame.legend(&mut svg, &entries);
    }

    Frame::close(&mut svg);
    Ok(svg)
}

/// Tallest bar: the largest value, or the largest per-category sum when stacked
fn data_max(categories: usize, series: &[Series], mode: BarMode) -> f64 {
    match mode {
        BarMode::Group => series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .fold(0.0, |acc: f64, v| acc.max(*v)),
        BarMode::Stack => (0..categories)
            .map(|i| {
                series
                    .iter()
                    .filter_map(|s| s.values[i])
                    .map(|v| v.max(0.0))
                    .sum::<f64>()
            })
            .fold(0.0, f64::max),
    }
}
