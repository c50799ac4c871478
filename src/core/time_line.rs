use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::{LegendError, LegendResult};
use crate::render::Color;

/// One timestamped sample of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimePoint {
    /// Builds a sample, rejecting non-finite values.
    pub fn new(time: DateTime<Utc>, value: f64) -> LegendResult<Self> {
        Ok(Self {
            time,
            value: ensure_finite(value, "point value")?,
        })
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> LegendResult<Self> {
        Self::new(time, decimal_to_f64(value, "point value")?)
    }
}

/// Cached minimum and maximum over every value a line has received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    #[must_use]
    pub const fn of(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// One plotted series: identity, chronological samples, cached extrema and
/// the sample currently inspected in pinpoint mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLine {
    label: String,
    color: Color,
    points: Vec<TimePoint>,
    extrema: Option<Extrema>,
    selection: Option<TimePoint>,
}

impl TimeLine {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            points: Vec::new(),
            extrema: None,
            selection: None,
        }
    }

    /// Builds a line from already collected samples.
    pub fn with_points(
        label: impl Into<String>,
        color: Color,
        points: impl IntoIterator<Item = TimePoint>,
    ) -> LegendResult<Self> {
        let mut line = Self::new(label, color);
        for point in points {
            line.push(point)?;
        }
        Ok(line)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    #[must_use]
    pub fn extrema(&self) -> Option<Extrema> {
        self.extrema
    }

    #[must_use]
    pub fn selection(&self) -> Option<TimePoint> {
        self.selection
    }

    /// Appends a sample.
    ///
    /// Samples must arrive in chronological order; a sample sharing the last
    /// timestamp is appended after it.
    pub fn push(&mut self, point: TimePoint) -> LegendResult<()> {
        ensure_finite(point.value, "point value")?;
        if let Some(last) = self.points.last() {
            if point.time < last.time {
                return Err(LegendError::InvalidData(format!(
                    "point for `{}` at {} is older than last point at {}",
                    self.label, point.time, last.time
                )));
            }
        }

        self.extrema = Some(match self.extrema {
            Some(extrema) => extrema.include(point.value),
            None => Extrema::of(point.value),
        });
        self.points.push(point);
        Ok(())
    }

    /// Value of the most recent sample.
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        self.points.last().map(|point| point.value)
    }

    /// Absolute difference between the last two sample values, `0.0` when
    /// fewer than two samples exist.
    #[must_use]
    pub fn diff_with_previous(&self) -> f64 {
        match self.points.as_slice() {
            [.., previous, last] => (last.value - previous.value).abs(),
            _ => 0.0,
        }
    }

    /// Sample closest to `time`. Ties resolve to the earlier sample.
    #[must_use]
    pub fn nearest_point(&self, time: DateTime<Utc>) -> Option<TimePoint> {
        let split = self.points.partition_point(|point| point.time < time);
        let before = split.checked_sub(1).and_then(|index| self.points.get(index));
        let after = self.points.get(split);

        match (before, after) {
            (Some(before), Some(after)) => {
                if (time - before.time) <= (after.time - time) {
                    Some(*before)
                } else {
                    Some(*after)
                }
            }
            (Some(point), None) | (None, Some(point)) => Some(*point),
            (None, None) => None,
        }
    }

    pub fn set_selection(&mut self, selection: Option<TimePoint>) {
        self.selection = selection;
    }
}
