use crate::api::PlotOptions;
use crate::core::PlotOffset;
use crate::error::ChartResult;
use crate::render::DrawingContext;

/// Read-only state handed to overlay hooks on every overlay pass.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContext<'a> {
    pub plot_offset: PlotOffset,
    pub options: &'a PlotOptions,
}

/// Participant in the plot's overlay redraw pipeline.
///
/// Hooks run after the context origin was moved to the plot area and must not
/// clear the canvas; the host owns that.
pub trait OverlayHook {
    fn id(&self) -> &str;
    fn draw_overlay(
        &mut self,
        ctx: &mut dyn DrawingContext,
        overlay: OverlayContext<'_>,
    ) -> ChartResult<()>;
}
