//! Overlay plugins that draw on top of the plot area.

pub mod markers;
pub mod plugins;
pub mod pointer_geometry;

pub use markers::{
    MARKER_PLUGIN_NAME, MARKER_PLUGIN_VERSION, MarkedPoint, MarkerOptions, MarkerOutcome,
    MarkerSide, MarkerSides, MarkerStore, MarkerStyle, SkipReason,
};
pub use plugins::{OverlayContext, OverlayHook};
pub use pointer_geometry::{
    POINTER_DEPTH_PX, POINTER_HALF_BASE_PX, POINTER_OFFSET_PX, pointer_outline, trace_pointer,
};
