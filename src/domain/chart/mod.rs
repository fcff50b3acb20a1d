//! Read-only view models handed to the chart widgets. Everything here is a pure
//! projection of cached series and derived statistics.

pub mod heatmap;
pub mod line_chart;

pub use heatmap::*;
pub use line_chart::*;
