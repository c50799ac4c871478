use chrono::{FixedOffset, Offset, Utc};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use super::format::{format_time, format_value};
use super::layout::compute_layout;
use super::{ChartMode, LegendConfig, LegendStyle, Y_AXIS_LEGEND_INDENT};
use crate::core::{Rect, TimeLine};
use crate::render::{CellBuffer, Style};

/// Read-only chart state borrowed for one legend pass.
#[derive(Debug, Clone, Copy)]
pub struct LegendState<'a> {
    pub lines: &'a [TimeLine],
    pub mode: ChartMode,
    pub legend: LegendConfig,
    pub precision: u8,
    pub style: LegendStyle,
    /// Offset pinpoint timestamps are shown in.
    pub time_offset: FixedOffset,
}

impl<'a> LegendState<'a> {
    #[must_use]
    pub fn new(lines: &'a [TimeLine], mode: ChartMode, legend: LegendConfig, precision: u8) -> Self {
        Self {
            lines,
            mode,
            legend,
            precision,
            style: LegendStyle::default(),
            time_offset: Utc.fix(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LegendStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_time_offset(mut self, time_offset: FixedOffset) -> Self {
        self.time_offset = time_offset;
        self
    }
}

/// Draws the legend for `state` into `buffer`, anchored to `region`.
///
/// A hidden legend performs no writes. Everything is recomputed from `state`
/// on each call.
pub fn render_legend(buffer: &mut impl CellBuffer, region: Rect, state: &LegendState<'_>) {
    if !state.legend.enabled {
        return;
    }

    let layout = compute_layout(
        state.lines.iter().map(TimeLine::label),
        state.mode,
        state.legend.details,
        state.precision,
        region.width(),
    );
    trace!(
        lines = state.lines.len(),
        rows = layout.row_count,
        columns = layout.column_count,
        column_width = layout.column_width,
        "render legend"
    );

    let detail_style = Style::fg(state.style.detail_color);
    let mut marker = [0u8; 4];
    let marker: &str = state.style.marker.encode_utf8(&mut marker);

    for cell in layout.cells(state.lines.len(), region) {
        let line = &state.lines[cell.index];
        let title_style = Style::fg(line.color());

        buffer.set_string(marker, title_style, cell.anchor.offset(-2, 0));
        buffer.set_string(line.label(), title_style, cell.anchor);

        for (row, text) in (Y_AXIS_LEGEND_INDENT..).zip(detail_rows(line, state)) {
            buffer.set_string(&text, detail_style, cell.anchor.offset(0, row));
        }
    }
}

/// Text drawn under a line's label, top to bottom.
///
/// Pinpoint mode shows the selected sample (nothing when the line has no
/// selection). Default mode shows current/max/min/diff stats when details are
/// on; a line without samples reports zero for each stat.
#[must_use]
pub fn detail_rows(line: &TimeLine, state: &LegendState<'_>) -> SmallVec<[String; 4]> {
    let precision = state.precision;
    match state.mode {
        ChartMode::Pinpoint => match line.selection() {
            Some(selection) => smallvec![
                format!(
                    "time  {}",
                    format_time(&selection.time.with_timezone(&state.time_offset))
                ),
                format!("value {}", format_value(selection.value, precision)),
            ],
            None => SmallVec::new(),
        },
        ChartMode::Default if !state.legend.details => SmallVec::new(),
        ChartMode::Default => {
            let current = line.current_value().unwrap_or(0.0);
            let (min, max) = line
                .extrema()
                .map_or((0.0, 0.0), |extrema| (extrema.min, extrema.max));
            smallvec![
                format!("cur {}", format_value(current, precision)),
                format!("max {}", format_value(max, precision)),
                format!("min {}", format_value(min, precision)),
                format!("dif {}", format_value(line.diff_with_previous(), precision)),
            ]
        }
    }
}
