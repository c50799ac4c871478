use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{LegendError, LegendResult};
use crate::legend::{LegendConfig, LegendStyle};
use crate::render::Color;

const SECONDS_PER_DAY: i32 = 86_400;

/// Public run-chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunChartConfig {
    #[serde(default = "default_precision")]
    pub precision: u8,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub legend_style: LegendStyle,
    /// Offset east of UTC used to show pinpoint timestamps.
    #[serde(default)]
    pub utc_offset_seconds: i32,
    /// Colors handed to new lines in order, wrapping around.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for RunChartConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            legend: LegendConfig::default(),
            legend_style: LegendStyle::default(),
            utc_offset_seconds: 0,
            palette: default_palette(),
        }
    }
}

impl RunChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets value precision for legend stat rows.
    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Sets initial legend switches.
    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_legend_style(mut self, legend_style: LegendStyle) -> Self {
        self.legend_style = legend_style;
        self
    }

    #[must_use]
    pub fn with_utc_offset_seconds(mut self, utc_offset_seconds: i32) -> Self {
        self.utc_offset_seconds = utc_offset_seconds;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> LegendResult<()> {
        self.time_offset()?;
        if self.palette.is_empty() {
            return Err(LegendError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn time_offset(&self) -> LegendResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            LegendError::InvalidConfig(format!(
                "utc offset must be within +/-{SECONDS_PER_DAY} seconds, got {}",
                self.utc_offset_seconds
            ))
        })
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> LegendResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| LegendError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> LegendResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LegendError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }

    pub(super) fn palette_color(&self, line_index: usize) -> Color {
        self.palette
            .get(line_index % self.palette.len().max(1))
            .copied()
            .unwrap_or_default()
    }
}

fn default_precision() -> u8 {
    1
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::Green,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
        Color::Blue,
        Color::Red,
    ]
}
