use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// Item descriptor handed out by the host, e.g. from a hover or click lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotItem {
    pub datapoint: DataPoint,
    pub page_x: f64,
    pub page_y: f64,
    pub series_index: Option<usize>,
}

impl PlotItem {
    #[must_use]
    pub fn new(datapoint: DataPoint, page_x: f64, page_y: f64) -> Self {
        Self {
            datapoint,
            page_x,
            page_y,
            series_index: None,
        }
    }

    #[must_use]
    pub fn with_series_index(mut self, series_index: usize) -> Self {
        self.series_index = Some(series_index);
        self
    }
}

/// Point reference accepted by the marker mutators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkTarget {
    Coordinate(DataPoint),
    Item(PlotItem),
}

impl MarkTarget {
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Coordinate(DataPoint::new(x, y))
    }

    #[must_use]
    pub fn datapoint(&self) -> DataPoint {
        match self {
            Self::Coordinate(point) => *point,
            Self::Item(item) => item.datapoint,
        }
    }

    /// Stable identity of the marked point, independent of any style.
    ///
    /// Raw coordinates and host items share a key when their data-space
    /// coordinates are identical.
    #[must_use]
    pub fn key(&self) -> MarkKey {
        MarkKey::from(self.datapoint())
    }
}

impl From<DataPoint> for MarkTarget {
    fn from(point: DataPoint) -> Self {
        Self::Coordinate(point)
    }
}

impl From<(f64, f64)> for MarkTarget {
    fn from((x, y): (f64, f64)) -> Self {
        Self::point(x, y)
    }
}

impl From<PlotItem> for MarkTarget {
    fn from(item: PlotItem) -> Self {
        Self::Item(item)
    }
}

/// Exact data-space coordinate pair used as the store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkKey {
    pub x: OrderedFloat<f64>,
    pub y: OrderedFloat<f64>,
}

impl From<DataPoint> for MarkKey {
    fn from(point: DataPoint) -> Self {
        Self {
            x: OrderedFloat(point.x),
            y: OrderedFloat(point.y),
        }
    }
}
