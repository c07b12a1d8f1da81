pub mod projection;
pub mod scale;
pub mod target;
pub mod types;

pub use projection::{LinearProjection, ProjectionRequest};
pub use scale::LinearScale;
pub use target::{MarkKey, MarkTarget, PlotItem};
pub use types::{DataPoint, PixelPoint, PlotOffset, Viewport};
