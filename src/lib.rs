//! runchart-legend: legend overlay for multi-line run charts on
//! character-grid terminals.
//!
//! The crate keeps a strict split between the chart state it reads
//! ([`api::RunChart`], [`core::TimeLine`]), the pure legend layout and text
//! formatting ([`legend`]), and the write capability it draws through
//! ([`render::CellBuffer`]).

pub mod api;
pub mod core;
pub mod error;
pub mod legend;
pub mod render;
pub mod telemetry;

pub use api::{RunChart, RunChartConfig};
pub use error::{LegendError, LegendResult};
