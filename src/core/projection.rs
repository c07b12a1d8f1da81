use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Point descriptor passed to a host projection.
///
/// `page_x`/`page_y` carry the originating pointer position when the point
/// came from a host item; linear projections ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub x: f64,
    pub y: f64,
    pub page_x: Option<f64>,
    pub page_y: Option<f64>,
}

impl ProjectionRequest {
    #[must_use]
    pub fn from_datapoint(point: DataPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
            page_x: None,
            page_y: None,
        }
    }

    #[must_use]
    pub fn with_page_position(mut self, page_x: f64, page_y: f64) -> Self {
        self.page_x = Some(page_x);
        self.page_y = Some(page_y);
        self
    }
}

/// Axis-aligned data-to-pixel projection over a plot area.
///
/// Data y grows upwards, pixel top grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjection {
    x_scale: LinearScale,
    y_scale: LinearScale,
    viewport: Viewport,
}

impl LinearProjection {
    pub fn new(x_scale: LinearScale, y_scale: LinearScale, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            x_scale,
            y_scale,
            viewport,
        })
    }

    pub fn from_domains(
        viewport: Viewport,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) -> ChartResult<Self> {
        Self::new(
            LinearScale::new(x_domain.0, x_domain.1)?,
            LinearScale::new(y_domain.0, y_domain.1)?,
            viewport,
        )
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    pub fn with_viewport(self, viewport: Viewport) -> ChartResult<Self> {
        Self::new(self.x_scale, self.y_scale, viewport)
    }

    pub fn project(self, request: ProjectionRequest) -> ChartResult<PixelPoint> {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let left = self.x_scale.domain_to_pixel(request.x, width)?;
        let top = height - self.y_scale.domain_to_pixel(request.y, height)?;
        Ok(PixelPoint::new(left, top))
    }

    pub fn unproject(self, pixel: PixelPoint) -> ChartResult<DataPoint> {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let x = self.x_scale.pixel_to_domain(pixel.left, width)?;
        let y = self.y_scale.pixel_to_domain(height - pixel.top, height)?;
        Ok(DataPoint::new(x, y))
    }
}
