//! Legend overlay for multi-line run charts.
//!
//! The legend is a grid of cells anchored to the right edge of the chart
//! region. Cells fill top-to-bottom first; extra columns grow leftward.
//! Each cell holds a marker, the line label and, depending on the chart mode,
//! either aggregate stats or the time/value of the pinpointed sample.

mod format;
mod layout;
mod renderer;

pub use format::{TIME_FORMAT, TIME_FORMAT_WIDTH, format_time, format_value};
pub use layout::{
    LegendCell, LegendLayout, cell_of, column_count, column_width, compute_layout, row_count,
};
pub use renderer::{LegendState, detail_rows, render_legend};

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Gap between adjacent legend columns, and between the rightmost column and
/// the region edge.
pub const X_AXIS_LEGEND_INDENT: i32 = 10;
/// Top indent of the first row, and spacing between rows when sizing the grid.
pub const Y_AXIS_LEGEND_INDENT: i32 = 1;

pub const HEIGHT_ON_DEFAULT: i32 = 2;
pub const HEIGHT_ON_PINPOINT: i32 = 4;
pub const HEIGHT_ON_DETAILS: i32 = 6;

/// Chart interaction state that drives the legend content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    #[default]
    Default,
    /// A cursor inspects one sample per line.
    Pinpoint,
}

impl ChartMode {
    /// Text rows reserved for one legend cell.
    #[must_use]
    pub const fn legend_row_height(self, details: bool) -> i32 {
        match (self, details) {
            (Self::Pinpoint, _) => HEIGHT_ON_PINPOINT,
            (Self::Default, true) => HEIGHT_ON_DETAILS,
            (Self::Default, false) => HEIGHT_ON_DEFAULT,
        }
    }
}

/// User-togglable legend switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub enabled: bool,
    pub details: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            details: false,
        }
    }
}

impl LegendConfig {
    #[must_use]
    pub const fn new(enabled: bool, details: bool) -> Self {
        Self { enabled, details }
    }

    #[must_use]
    pub const fn hidden() -> Self {
        Self::new(false, false)
    }

    #[must_use]
    pub const fn detailed() -> Self {
        Self::new(true, true)
    }

    #[must_use]
    pub const fn toggle_enabled(self) -> Self {
        Self::new(!self.enabled, self.details)
    }

    #[must_use]
    pub const fn toggle_details(self) -> Self {
        Self::new(self.enabled, !self.details)
    }
}

/// Glyph and neutral color used for the non-label parts of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendStyle {
    #[serde(default = "default_marker")]
    pub marker: char,
    #[serde(default = "default_detail_color")]
    pub detail_color: Color,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            detail_color: default_detail_color(),
        }
    }
}

fn default_marker() -> char {
    '•'
}

fn default_detail_color() -> Color {
    Color::White
}
