use crate::core::{LinearProjection, PixelPoint, PlotOffset, ProjectionRequest, Viewport};
use crate::error::ChartResult;

/// Services a charting engine provides to the plot overlay.
pub trait PlotHost {
    /// Maps a data-space point to pixels relative to the plot area origin.
    fn point_to_canvas(&self, request: ProjectionRequest) -> ChartResult<PixelPoint>;

    /// Distance from the overlay canvas origin to the plot area.
    fn plot_offset(&self) -> PlotOffset;

    /// Asks the host to schedule an overlay pass. Fire and forget.
    fn trigger_redraw_overlay(&mut self);
}

/// Reference host backed by a [`LinearProjection`].
///
/// Counts redraw requests instead of scheduling them, which makes it the
/// host of choice for headless use and tests.
#[derive(Debug, Clone)]
pub struct LinearPlotHost {
    projection: LinearProjection,
    offset: PlotOffset,
    redraw_requests: usize,
}

impl LinearPlotHost {
    #[must_use]
    pub fn new(projection: LinearProjection, offset: PlotOffset) -> Self {
        Self {
            projection,
            offset,
            redraw_requests: 0,
        }
    }

    pub fn from_domains(
        viewport: Viewport,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) -> ChartResult<Self> {
        Ok(Self::new(
            LinearProjection::from_domains(viewport, x_domain, y_domain)?,
            PlotOffset::default(),
        ))
    }

    #[must_use]
    pub fn with_plot_offset(mut self, offset: PlotOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn projection(&self) -> LinearProjection {
        self.projection
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.projection.viewport()
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.projection = self.projection.with_viewport(viewport)?;
        Ok(())
    }

    pub fn set_plot_offset(&mut self, offset: PlotOffset) {
        self.offset = offset;
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }
}

impl PlotHost for LinearPlotHost {
    fn point_to_canvas(&self, request: ProjectionRequest) -> ChartResult<PixelPoint> {
        self.projection.project(request)
    }

    fn plot_offset(&self) -> PlotOffset {
        self.offset
    }

    fn trigger_redraw_overlay(&mut self) {
        self.redraw_requests += 1;
    }
}
