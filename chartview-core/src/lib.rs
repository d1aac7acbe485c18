//! Chartview Core
//!
//! Platform-agnostic routing and charting logic for the Chartview single-page app.
//! This crate provides the route table, the navigation handler that matches
//! addresses against it, and the chart datasets and SVG geometry the views render.

pub mod chart;
pub mod config;
pub mod error;
pub mod mode;
pub mod navigation;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use chart::{
    BarChart, ChartData, ChartDataError, Extent, Frame, LineChart, PieChart, PieSlice,
    ScatterChart, ScatterSeries, Series, Slice,
};
pub use config::{Fallback, RouterConfig};
pub use error::RouterError;
pub use mode::AddressingMode;
pub use navigation::{Navigation, Resolution};
pub use table::{RouteEntry, RouteTable, chart_routes};
pub use view::ViewId;
