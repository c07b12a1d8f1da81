use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::{
    MARKER_PLUGIN_NAME, MARKER_PLUGIN_VERSION, MarkerOptions, MarkerStore, OverlayContext,
    OverlayHook,
};
use crate::render::DrawingContext;

use super::{PlotHost, PlotOptions};

/// One plot instance: host services, options, the marker overlay and any
/// additional overlay hooks.
///
/// Marker state lives and dies with the plot.
pub struct Plot<H: PlotHost> {
    pub(super) host: H,
    pub(super) options: PlotOptions,
    pub(super) markers: MarkerStore,
    pub(super) overlay_hooks: Vec<Box<dyn OverlayHook>>,
    pub(super) pending_overlay_redraw: bool,
}

impl<H: PlotHost> Plot<H> {
    /// Creates a plot with an empty marker overlay.
    pub fn new(host: H, options: PlotOptions) -> ChartResult<Self> {
        options.validate()?;
        debug!(
            plugin = MARKER_PLUGIN_NAME,
            version = MARKER_PLUGIN_VERSION,
            "overlay plugin initialized"
        );
        Ok(Self {
            host,
            options,
            markers: MarkerStore::new(),
            overlay_hooks: Vec::new(),
            pending_overlay_redraw: false,
        })
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Replaces the plot-wide marker defaults and schedules an overlay pass.
    pub fn set_marker_options(&mut self, marker: MarkerOptions) -> ChartResult<()> {
        marker.validate()?;
        self.options.series.marker = marker;
        self.request_overlay_redraw();
        Ok(())
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    #[must_use]
    pub fn has_pending_overlay_redraw(&self) -> bool {
        self.pending_overlay_redraw
    }

    pub fn clear_pending_overlay_redraw(&mut self) {
        self.pending_overlay_redraw = false;
    }

    pub(super) fn request_overlay_redraw(&mut self) {
        self.pending_overlay_redraw = true;
        self.host.trigger_redraw_overlay();
    }

    /// Runs one overlay pass: markers first, then registered hooks in
    /// registration order.
    ///
    /// The context state is saved and moved to the plot area origin for the
    /// duration of the pass and restored afterwards, also when a hook fails.
    pub fn draw_overlay(&mut self, ctx: &mut dyn DrawingContext) -> ChartResult<()> {
        let plot_offset = self.host.plot_offset();
        ctx.save()?;
        ctx.translate(plot_offset.left, plot_offset.top);

        let overlay = OverlayContext {
            plot_offset,
            options: &self.options,
        };
        let drawn = run_overlay_hooks(&mut self.markers, &mut self.overlay_hooks, ctx, overlay);
        let restored = ctx.restore();

        self.pending_overlay_redraw = false;
        drawn?;
        restored
    }

    /// Draws the overlay only when a redraw was requested since the last pass.
    pub fn draw_overlay_if_pending(&mut self, ctx: &mut dyn DrawingContext) -> ChartResult<bool> {
        if !self.pending_overlay_redraw {
            return Ok(false);
        }
        self.draw_overlay(ctx)?;
        Ok(true)
    }
}

fn run_overlay_hooks(
    markers: &mut MarkerStore,
    hooks: &mut [Box<dyn OverlayHook>],
    ctx: &mut dyn DrawingContext,
    overlay: OverlayContext<'_>,
) -> ChartResult<()> {
    markers.draw_overlay(ctx, overlay)?;
    for hook in hooks {
        hook.draw_overlay(ctx, overlay)?;
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
impl<H: PlotHost> Plot<H> {
    /// Draws the overlay onto an external Cairo context, e.g. inside a GTK
    /// `DrawingArea` callback.
    pub fn draw_overlay_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let mut adapter = crate::render::CairoDrawingContext::new(context);
        self.draw_overlay(&mut adapter)
    }

    /// Clears `surface` and draws a fresh overlay pass onto it.
    pub fn render_overlay_surface(
        &mut self,
        surface: &crate::render::CairoOverlaySurface,
    ) -> ChartResult<()> {
        surface.clear()?;
        let context = surface.context()?;
        self.draw_overlay_on_cairo_context(&context)
    }
}
