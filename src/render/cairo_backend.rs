use std::io::Write;

use cairo::{Context, Format, ImageSurface, Operator};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingContext, LineJoin};

/// `DrawingContext` adapter over an external Cairo context, for example the
/// one handed to a GTK `DrawingArea` draw callback.
///
/// Cairo consumes the path on `fill`/`stroke`; the adapter uses the
/// `*_preserve` variants to keep canvas semantics and clears the path on
/// `begin_path`.
pub struct CairoDrawingContext<'a> {
    context: &'a Context,
    fill_color: Color,
    stroke_color: Color,
}

impl<'a> CairoDrawingContext<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
        }
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl DrawingContext for CairoDrawingContext<'_> {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.context.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.apply_color(self.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.apply_color(self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }
}

/// Offscreen transparent ARGB32 surface for overlay passes.
#[derive(Debug)]
pub struct CairoOverlaySurface {
    surface: ImageSurface,
}

impl CairoOverlaySurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self { surface })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&self) -> ChartResult<()> {
        let context = self.context()?;
        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    pub fn write_png(&self, writer: &mut impl Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
