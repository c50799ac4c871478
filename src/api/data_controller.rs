use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::core::{TimeLine, TimePoint};
use crate::error::{LegendError, LegendResult};
use crate::render::Color;

use super::RunChart;

impl RunChart {
    /// Adds an empty line, or returns the index of the existing one.
    ///
    /// New lines take the next palette color unless `color` is given.
    pub fn add_line(&mut self, label: &str, color: Option<Color>) -> usize {
        if let Some(index) = self.line_index(label) {
            return index;
        }
        let color = color.unwrap_or_else(|| self.config.palette_color(self.lines.len()));
        self.lines.push(TimeLine::new(label, color));
        debug!(label, count = self.lines.len(), "add line");
        self.lines.len() - 1
    }

    /// Appends one sample to the line named `label`, creating it on first use.
    ///
    /// Rejects non-finite values and samples older than the line's latest one.
    pub fn consume_value(
        &mut self,
        label: &str,
        time: DateTime<Utc>,
        value: f64,
    ) -> LegendResult<()> {
        let point = match TimePoint::new(time, value) {
            Ok(point) => point,
            Err(err) => {
                warn!(label, value, error = %err, "rejecting sample");
                return Err(err);
            }
        };
        self.consume_point(label, point)
    }

    /// Decimal variant of [`RunChart::consume_value`].
    pub fn consume_decimal(
        &mut self,
        label: &str,
        time: DateTime<Utc>,
        value: Decimal,
    ) -> LegendResult<()> {
        let point = match TimePoint::from_decimal(time, value) {
            Ok(point) => point,
            Err(err) => {
                warn!(label, %value, error = %err, "rejecting decimal sample");
                return Err(err);
            }
        };
        self.consume_point(label, point)
    }

    /// Drops the line named `label`. Later lines shift one legend cell up.
    pub fn remove_line(&mut self, label: &str) -> LegendResult<TimeLine> {
        let index = self
            .line_index(label)
            .ok_or_else(|| LegendError::UnknownLine(label.to_owned()))?;
        debug!(label, "remove line");
        Ok(self.lines.remove(index))
    }

    fn consume_point(&mut self, label: &str, point: TimePoint) -> LegendResult<()> {
        let index = self.add_line(label, None);
        let line = &mut self.lines[index];
        if let Err(err) = line.push(point) {
            warn!(label, error = %err, "rejecting sample");
            return Err(err);
        }
        trace!(label, count = line.points().len(), "append sample");
        Ok(())
    }

    fn line_index(&self, label: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.label() == label)
    }
}
