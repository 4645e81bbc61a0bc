//! Box plots with every point drawn, one box per player.

use super::frame::Frame;
use super::{escape_xml, format_value, series_color, ChartConfig};
use crate::utils::error::ChartError;
use log::debug;

/// Box width as a fraction of the category slot
const BOX_WIDTH: f64 = 0.5;

/// Whisker cap width as a fraction of the box width
const WHISKER_WIDTH: f64 = 0.2;

/// Horizontal spread of points as a fraction of the box width
const JITTER: f64 = 0.5;

const POINT_RADIUS: f64 = 1.5;

/// Values for one box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl BoxSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Five-number summary plus mean
///
/// Quartiles use linear interpolation between closest ranks; whiskers reach
/// the furthest values within 1.5 IQR of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub mean: f64,
}

impl BoxStats {
    /// `None` when there are no finite values
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted.iter().copied().find(|v| *v >= low_fence).unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .unwrap_or(q3);
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Some(Self {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            mean,
        })
    }
}

/// Quantile of sorted, non-empty data by linear interpolation
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// Deterministic offset in [-0.5, 0.5) for the n-th point
fn jitter_offset(index: usize) -> f64 {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (index as f64 * GOLDEN).fract() - 0.5
}

/// Render one box per series as SVG
///
/// # Errors
/// * `ChartError::InvalidDimensions` - Configured size is too small to draw in
pub fn render_box_plot(boxes: &[BoxSeries], config: &ChartConfig) -> Result<String, ChartError> {
    let data_max = boxes
        .iter()
        .flat_map(|b| b.values.iter())
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let frame = Frame::new(config, data_max)?;

    debug!("Rendering box plot '{}': {} boxes", config.title, boxes.len());

    let mut svg = String::new();
    frame.open(&mut svg, &config.title);

    if boxes.is_empty() {
        frame.no_data(&mut svg);
    } else {
        let box_width = frame.slot_width(boxes.len()) * BOX_WIDTH;

        for (i, series) in boxes.iter().enumerate() {
            let center = frame.slot_center(boxes.len(), i);
            let color = series_color(i);
            if let Some(stats) = BoxStats::from_values(&series.values) {
                render_box(&mut svg, &frame, center, box_width, color, &series.name, &stats);
            }
            render_points(&mut svg, &frame, center, box_width, color, &series.values);
        }

        let categories: Vec<String> = boxes.iter().map(|b| b.name.clone()).collect();
        frame.x_labels(&mut svg, &categories);
    }

    if config.show_legend {
        let entries: Vec<(&str, &str)> = boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name.as_str(), series_color(i)))
            .collect();
        frame.legend(&mut svg, &entries);
    }

    Frame::close(&mut svg);
    Ok(svg)
}

fn render_box(
    out: &mut String,
    frame: &Frame,
    center: f64,
    width: f64,
    color: &str,
    name: &str,
    stats: &BoxStats,
) {
    let left = center - width / 2.0;
    let right = center + width / 2.0;
    let cap = width * WHISKER_WIDTH / 2.0;

    // Whiskers and caps
    for (from, to) in [(stats.q3, stats.upper_whisker), (stats.q1, stats.lower_whisker)] {
        out.push_str(&format!(
            r#"<line x1="{c:.2}" y1="{:.2}" x2="{c:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            frame.y(from),
            frame.y(to),
            color,
            c = center
        ));
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"/>"#,
            center - cap,
            center + cap,
            color,
            y = frame.y(to)
        ));
    }

    let top = frame.y(stats.q3);
    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{c}" fill-opacity="0.5" stroke="{c}" stroke-width="1"><title>{}: median {}, mean {}, q1 {}, q3 {}</title></rect>"#,
        left,
        top,
        width,
        frame.y(stats.q1) - top,
        escape_xml(name),
        format_value(stats.median),
        format_value(stats.mean),
        format_value(stats.q1),
        format_value(stats.q3),
        c = color
    ));

    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="2"/>"#,
        left,
        right,
        color,
        y = frame.y(stats.median)
    ));
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1" stroke-dasharray="4 3"/>"#,
        left,
        right,
        color,
        y = frame.y(stats.mean)
    ));
}

fn render_points(out: &mut String, frame: &Frame, center: f64, width: f64, color: &str, values: &[f64]) {
    for (n, value) in values.iter().filter(|v| v.is_finite()).enumerate() {
        let x = center + jitter_offset(n) * JITTER * width;
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            x,
            frame.y(*value),
            POINT_RADIUS,
            color
        ));
    }
}
