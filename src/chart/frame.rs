//! Shared chart frame: background, title, y-axis gridlines, category labels
//! and legend.
//!
//! Layout (pixels):
//!
//! ```text
//!  +-------------------------------------------+
//!  | title                            legend   |  MARGIN_TOP
//!  |   +-----------------------------------+   |
//!  | y |            plot area              |   |
//!  |   +-----------------------------------+   |
//!  |      rotated category labels              |  MARGIN_BOTTOM
//!  +-------------------------------------------+
//! ```

use super::{escape_xml, format_value, ChartConfig};
use crate::utils::error::ChartError;

pub const MARGIN_LEFT: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_TOP: f64 = 100.0;
pub const MARGIN_BOTTOM: f64 = 80.0;

pub const MIN_WIDTH: usize = 200;
pub const MIN_HEIGHT: usize = 250;

/// Gridline spacing doubles until at most this many fit
pub const MAX_GRIDLINES: usize = 20;

const BACKGROUND: &str = "rgb(243, 243, 243)";
const GRID: &str = "rgb(255, 255, 255)";
const TEXT: &str = "rgb(68, 68, 68)";

/// Plot geometry for one chart
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,

    /// Value at the top of the y axis
    pub y_max: f64,

    /// Gridline spacing actually used
    pub step: f64,
}

impl Frame {
    /// Lay out a frame whose y axis runs from 0 to at least `data_max`
    pub fn new(config: &ChartConfig, data_max: f64) -> Result<Self, ChartError> {
        if config.width < MIN_WIDTH || config.height < MIN_HEIGHT {
            return Err(ChartError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let (y_max, step) = axis_range(data_max, config.dtick);
        let width = config.width as f64;
        let height = config.height as f64;

        Ok(Self {
            width,
            height,
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
            y_max,
            step,
        })
    }

    pub fn plot_width(&self) -> f64 {
        self.right - self.left
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Pixel y for a data value; values below zero sit on the axis
    pub fn y(&self, value: f64) -> f64 {
        self.bottom - value.max(0.0) / self.y_max * self.plot_height()
    }

    /// Width of one category slot
    pub fn slot_width(&self, categories: usize) -> f64 {
        self.plot_width() / categories.max(1) as f64
    }

    /// Horizontal centre of category `index`
    pub fn slot_center(&self, categories: usize, index: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.slot_width(categories)
    }

    /// SVG header, background, title and gridlines
    pub fn open(&self, out: &mut String, title: &str) {
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="'Open Sans', verdana, arial, sans-serif">"#,
            w = self.width,
            h = self.height
        ));
        out.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, BACKGROUND
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="17" fill="{}">{}</text>"#,
            self.left,
            self.top / 2.0,
            TEXT,
            escape_xml(title)
        ));

        let lines = (self.y_max / self.step).round() as usize;
        for k in 0..=lines {
            let value = k as f64 * self.step;
            let y = self.y(value);
            // Zero line is drawn heavier
            let stroke_width = if k == 0 { 2 } else { 1 };
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                self.left, y, self.right, y, GRID, stroke_width
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" fill="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                self.left - 6.0,
                y,
                TEXT,
                format_value(value)
            ));
        }
    }

    /// Rotated category labels under the plot
    pub fn x_labels(&self, out: &mut String, categories: &[String]) {
        for (i, category) in categories.iter().enumerate() {
            let x = self.slot_center(categories.len(), i);
            let y = self.bottom + 14.0;
            out.push_str(&format!(
                r#"<text x="{x:.2}" y="{y:.2}" font-size="11" fill="{}" text-anchor="end" transform="rotate(-45 {x:.2} {y:.2})">{}</text>"#,
                TEXT,
                escape_xml(category),
                x = x,
                y = y
            ));
        }
    }

    /// Legend entries laid out right-aligned above the plot
    pub fn legend(&self, out: &mut String, entries: &[(&str, &str)]) {
        let entry_width = 110.0;
        let start = self.right - entry_width * entries.len() as f64;
        let y = self.top - 30.0;

        for (i, (label, color)) in entries.iter().enumerate() {
            let x = start + i as f64 * entry_width;
            out.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="14" height="14" fill="{}" rx="2"/>"#,
                x,
                y - 11.0,
                color
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="12" fill="{}">{}</text>"#,
                x + 20.0,
                y,
                TEXT,
                escape_xml(label)
            ));
        }
    }

    /// Placeholder for a chart with nothing to draw
    pub fn no_data(&self, out: &mut String) {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="14" fill="{}" text-anchor="middle">No data</text>"#,
            self.left + self.plot_width() / 2.0,
            self.top + self.plot_height() / 2.0,
            TEXT
        ));
    }

    pub fn close(out: &mut String) {
        out.push_str("</svg>");
    }
}

/// Axis top and gridline step for the given data maximum
///
/// The step starts at `dtick` and doubles while more than `MAX_GRIDLINES`
/// lines would be needed. The top is the first gridline at or above the data.
pub fn axis_range(data_max: f64, dtick: f64) -> (f64, f64) {
    let mut step = if dtick.is_finite() && dtick > 0.0 { dtick } else { 1.0 };
    let max = if data_max.is_finite() && data_max > 0.0 {
        data_max
    } else {
        step
    };

    while (max / step).ceil() > MAX_GRIDLINES as f64 {
        step *= 2.0;
    }

    let top = ((max / step).ceil() * step).max(step);
    (top, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_range_rounds_up_to_step() {
        assert_eq!(axis_range(42.0, 5.0), (45.0, 5.0));
        assert_eq!(axis_range(45.0, 5.0), (45.0, 5.0));
    }

    #[test]
    fn test_axis_range_widens_dense_grid() {
        // 400 / 5 = 80 lines; step 10 -> 40 lines; step 20 -> 20 lines
        assert_eq!(axis_range(400.0, 5.0), (400.0, 20.0));
    }

    #[test]
    fn test_axis_range_empty_data() {
        assert_eq!(axis_range(0.0, 25.0), (25.0, 25.0));
        assert_eq!(axis_range(f64::NAN, 0.0), (1.0, 1.0));
    }

    #[test]
    fn test_frame_rejects_tiny_dimensions() {
        let config = ChartConfig::new().with_size(100, 100);
        assert!(matches!(
            Frame::new(&config, 10.0),
            Err(ChartError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_frame_y_mapping() {
        let config = ChartConfig::new().with_size(400, 380).with_dtick(10.0);
        let frame = Frame::new(&config, 100.0).unwrap();
        assert_eq!(frame.y(0.0), frame.bottom);
        assert_eq!(frame.y(100.0), frame.top);
        assert_eq!(frame.y(-5.0), frame.bottom);
    }

    #[test]
    fn test_frame_margins() {
        let frame = Frame::new(&ChartConfig::new().with_size(600, 400), 10.0).unwrap();
        assert_eq!(frame.left, 40.0);
        assert_eq!(frame.right, 570.0);
        assert_eq!(frame.top, 100.0);
        assert_eq!(frame.bottom, 320.0);
    }
}
