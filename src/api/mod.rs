//! Host-facing plot API.
//!
//! A [`Plot`] owns the marker overlay for one chart instance and talks to the
//! charting engine through [`PlotHost`].

mod host;
mod marker_controller;
mod overlay_registry;
mod plot;
mod plot_options;

pub use host::{LinearPlotHost, PlotHost};
pub use plot::Plot;
pub use plot_options::{PlotOptions, SeriesOptions};
