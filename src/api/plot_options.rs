use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerOptions;

/// Series-level option block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    pub marker: MarkerOptions,
}

/// Options tree a plot is configured with.
///
/// Every field has a default, so a JSON document only needs the values it
/// overrides:
///
/// ```json
/// { "series": { "marker": { "color": "#ff0000" } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub series: SeriesOptions,
}

impl PlotOptions {
    #[must_use]
    pub fn with_marker_options(mut self, marker: MarkerOptions) -> Self {
        self.series.marker = marker;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.series.marker.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse plot options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize plot options: {e}"))
        })
    }
}
