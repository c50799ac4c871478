use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use crate::core::{Rect, TimeLine};
use crate::error::LegendResult;
use crate::legend::{
    ChartMode, LegendConfig, LegendLayout, LegendState, compute_layout, render_legend,
};
use crate::render::CellBuffer;

use super::RunChartConfig;

/// Chart state the legend reads from.
///
/// `RunChart` owns the lines, the active mode and the legend switches. It
/// holds nothing legend-specific between frames: every call to
/// [`RunChart::render_legend`] works from the current state alone.
#[derive(Debug, Clone)]
pub struct RunChart {
    pub(super) config: RunChartConfig,
    pub(super) time_offset: FixedOffset,
    pub(super) lines: Vec<TimeLine>,
    pub(super) mode: ChartMode,
}

impl RunChart {
    pub fn new(config: RunChartConfig) -> LegendResult<Self> {
        config.validate()?;
        let time_offset = config.time_offset()?;
        Ok(Self {
            config,
            time_offset,
            lines: Vec::new(),
            mode: ChartMode::Default,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RunChartConfig {
        &self.config
    }

    #[must_use]
    pub fn lines(&self) -> &[TimeLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, label: &str) -> Option<&TimeLine> {
        self.lines.iter().find(|line| line.label() == label)
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    pub fn set_precision(&mut self, precision: u8) {
        self.config.precision = precision;
    }

    #[must_use]
    pub fn legend(&self) -> LegendConfig {
        self.config.legend
    }

    pub fn set_legend(&mut self, legend: LegendConfig) {
        self.config.legend = legend;
    }

    pub fn toggle_legend(&mut self) {
        self.config.legend = self.config.legend.toggle_enabled();
    }

    pub fn toggle_details(&mut self) {
        self.config.legend = self.config.legend.toggle_details();
    }

    /// Enters pinpoint mode, selecting the sample nearest `time` on each line.
    ///
    /// Lines without samples end up with no selection.
    pub fn pinpoint(&mut self, time: DateTime<Utc>) {
        for line in &mut self.lines {
            let selection = line.nearest_point(time);
            line.set_selection(selection);
        }
        debug!(lines = self.lines.len(), %time, "pinpoint selection");
        self.mode = ChartMode::Pinpoint;
    }

    /// Leaves pinpoint mode and drops every selection.
    pub fn reset_selection(&mut self) {
        for line in &mut self.lines {
            line.set_selection(None);
        }
        self.mode = ChartMode::Default;
    }

    /// Snapshot handed to the legend renderer.
    #[must_use]
    pub fn legend_state(&self) -> LegendState<'_> {
        LegendState::new(&self.lines, self.mode, self.config.legend, self.config.precision)
            .with_style(self.config.legend_style)
            .with_time_offset(self.time_offset)
    }

    /// Layout the next legend pass would use inside `region`.
    #[must_use]
    pub fn legend_layout(&self, region: Rect) -> LegendLayout {
        compute_layout(
            self.lines.iter().map(TimeLine::label),
            self.mode,
            self.config.legend.details,
            self.config.precision,
            region.width(),
        )
    }

    /// Draws the legend overlay. Called from the chart's own draw routine.
    pub fn render_legend(&self, buffer: &mut impl CellBuffer, region: Rect) {
        render_legend(buffer, region, &self.legend_state());
    }
}
