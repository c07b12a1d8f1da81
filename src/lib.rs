//! plot-markers: directional point markers for a chart overlay.
//!
//! Callers flag data points with small colored triangular pointers drawn on
//! the plot's redraw-on-demand overlay, and unflag them later. The charting
//! engine stays external: it provides projection, plot offset and redraw
//! scheduling through [`api::PlotHost`] and a drawing surface through
//! [`render::DrawingContext`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{LinearPlotHost, Plot, PlotHost, PlotOptions};
pub use error::{ChartError, ChartResult};
