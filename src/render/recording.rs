use crate::error::ChartResult;
use crate::render::{Color, DrawingContext, LineJoin};

/// One call received by a [`RecordingContext`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    LineWidth(f64),
    LineJoin(LineJoin),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    FillColor(Color),
    StrokeColor(Color),
    Fill,
    Stroke,
}

/// Headless drawing context that records every call.
///
/// Used by tests and by hosts that replay overlay passes onto their own
/// surface.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Vertices visited by `move_to`/`line_to`, in call order.
    #[must_use]
    pub fn path_points(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Fill))
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Stroke))
    }

    #[must_use]
    pub fn sub_path_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::MoveTo { .. }))
    }
}

impl DrawingContext for RecordingContext {
    fn save(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::LineJoin(join));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }
}
