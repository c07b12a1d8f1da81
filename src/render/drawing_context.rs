use crate::error::ChartResult;
use crate::render::{Color, LineJoin};

/// Path-based 2D drawing surface supplied by the host for overlay passes.
///
/// Follows canvas semantics: `fill` and `stroke` both keep the current path, so
/// one traced path can be filled and then outlined.
pub trait DrawingContext {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn translate(&mut self, dx: f64, dy: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn fill(&mut self) -> ChartResult<()>;
    fn stroke(&mut self) -> ChartResult<()>;
}
