//! cellchart: scrollable bar and line charts plus pie charts.
//!
//! The crate resolves chart geometry (value-to-pixel mapping, gridlines, bar
//! and slice outlines, line segments split at the zero axis, tooltip
//! placement) and hands fully resolved primitives to a [`render::Renderer`].
//! Bar and line charts draw one item per value into a host-provided
//! [`api::VirtualizedList`]; pie charts draw onto a single plot surface.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChart, BarChartSettings, LineChart, LineChartSettings, PieChart, PieChartSettings,
    SettingsDocument,
};
pub use error::{ChartError, ChartResult};
