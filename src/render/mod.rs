mod drawing_context;
mod primitives;
mod recording;

pub use drawing_context::DrawingContext;
pub use primitives::{Color, LineJoin};
pub use recording::{DrawCommand, RecordingContext};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoDrawingContext, CairoOverlaySurface};
