use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::format::{TIME_FORMAT_WIDTH, format_value};
use super::{ChartMode, X_AXIS_LEGEND_INDENT, Y_AXIS_LEGEND_INDENT};
use crate::core::{Point, Rect};

/// Grid shape of one legend pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendLayout {
    pub row_height: i32,
    pub row_count: usize,
    pub column_count: usize,
    pub column_width: usize,
}

/// Placement of one line inside the legend grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendCell {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// Where the label starts; the marker sits two cells to its left.
    pub anchor: Point,
}

impl LegendLayout {
    /// Cell of the line at `index`, or `None` past the last line.
    #[must_use]
    pub fn cell(&self, index: usize, line_count: usize, region: Rect) -> Option<LegendCell> {
        if index >= line_count {
            return None;
        }
        let (row, column) = cell_of(index, self.row_count);
        Some(LegendCell {
            index,
            row,
            column,
            anchor: self.anchor(row, column, region),
        })
    }

    /// Label origin for `(row, column)`.
    ///
    /// Column 0 hugs the right edge of `region`; each further column moves
    /// one `column_width + X_AXIS_LEGEND_INDENT` step to the left.
    #[must_use]
    pub fn anchor(&self, row: usize, column: usize, region: Rect) -> Point {
        let column_step = saturating_i32(self.column_width).saturating_add(X_AXIS_LEGEND_INDENT);
        let x = region
            .max
            .x
            .saturating_sub(column_step.saturating_mul(saturating_i32(column + 1)));
        let y = region
            .min
            .y
            .saturating_add(Y_AXIS_LEGEND_INDENT)
            .saturating_add(saturating_i32(row).saturating_mul(self.row_height));
        Point::new(x, y)
    }

    /// Every occupied cell, column by column, top to bottom.
    pub fn cells(&self, line_count: usize, region: Rect) -> impl Iterator<Item = LegendCell> + '_ {
        (0..self.column_count).flat_map(move |column| {
            (0..self.row_count)
                .map(move |row| row + self.row_count * column)
                .take_while(move |index| *index < line_count)
                .filter_map(move |index| self.cell(index, line_count, region))
        })
    }
}

/// Plans the legend grid for `labels` inside a region `region_width` cells wide.
#[must_use]
pub fn compute_layout<'a, I>(
    labels: I,
    mode: ChartMode,
    details: bool,
    precision: u8,
    region_width: i32,
) -> LegendLayout
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: ExactSizeIterator,
{
    let labels = labels.into_iter();
    let line_count = labels.len();
    let row_count = row_count(mode, details, region_width);
    LegendLayout {
        row_height: mode.legend_row_height(details),
        row_count,
        column_count: column_count(line_count, row_count),
        column_width: column_width(mode, labels, precision),
    }
}

/// Cells that fit in one column, never less than one.
#[must_use]
pub fn row_count(mode: ChartMode, details: bool, region_width: i32) -> usize {
    let row_height = mode.legend_row_height(details);
    let fitted =
        region_width.saturating_sub(Y_AXIS_LEGEND_INDENT) / (row_height + Y_AXIS_LEGEND_INDENT);
    if fitted < 1 {
        debug!(
            region_width,
            row_height,
            fitted,
            "legend region too small, clamping row count to 1"
        );
        return 1;
    }
    usize::try_from(fitted).unwrap_or(1)
}

#[must_use]
pub fn column_count(line_count: usize, row_count: usize) -> usize {
    line_count.div_ceil(row_count.max(1))
}

/// Width shared by every legend column.
///
/// Pinpoint cells only need room for a timestamp; otherwise the widest label
/// wins, with a zero rendered at `precision` as the floor.
#[must_use]
pub fn column_width<'a>(
    mode: ChartMode,
    labels: impl IntoIterator<Item = &'a str>,
    precision: u8,
) -> usize {
    if mode == ChartMode::Pinpoint {
        return TIME_FORMAT_WIDTH;
    }
    labels
        .into_iter()
        .map(UnicodeWidthStr::width)
        .fold(format_value(0.0, precision).width(), usize::max)
}

/// Column-major `(row, column)` of the line at `index`.
#[must_use]
pub fn cell_of(index: usize, row_count: usize) -> (usize, usize) {
    let row_count = row_count.max(1);
    (index % row_count, index / row_count)
}

fn saturating_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
