//! Host-facing run chart: owns lines, mode and legend switches, and exposes
//! the legend draw entry point.

mod chart_config;
mod data_controller;
mod run_chart;

pub use chart_config::RunChartConfig;
pub use run_chart::RunChart;
