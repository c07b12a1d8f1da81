use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{MarkKey, MarkTarget, PixelPoint, ProjectionRequest};
use crate::error::{ChartError, ChartResult};
use crate::extensions::pointer_geometry::trace_pointer;
use crate::extensions::{OverlayContext, OverlayHook};
use crate::render::{Color, DrawingContext, LineJoin};

/// Plugin name the marker overlay registers under.
pub const MARKER_PLUGIN_NAME: &str = "marker";
pub const MARKER_PLUGIN_VERSION: &str = "0.1";

const MARKER_LINE_WIDTH_PX: f64 = 1.0;

/// Direction a marker pointer is drawn in, relative to the marked point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSide {
    Top,
    Left,
    Right,
    Bottom,
}

impl MarkerSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Right, Self::Bottom];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for MarkerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerSide {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            other => Err(ChartError::InvalidData(format!(
                "unknown marker side `{other}`"
            ))),
        }
    }
}

/// Ordered, duplicate-free, non-empty set of marker sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MarkerSide>", into = "Vec<MarkerSide>")]
pub struct MarkerSides(SmallVec<[MarkerSide; 4]>);

impl MarkerSides {
    pub fn new(sides: impl IntoIterator<Item = MarkerSide>) -> ChartResult<Self> {
        let mut ordered = SmallVec::<[MarkerSide; 4]>::new();
        for side in sides {
            if !ordered.contains(&side) {
                ordered.push(side);
            }
        }
        if ordered.is_empty() {
            return Err(ChartError::InvalidData(
                "marker sides must not be empty".to_owned(),
            ));
        }
        Ok(Self(ordered))
    }

    #[must_use]
    pub fn all() -> Self {
        Self(SmallVec::from_buf(MarkerSide::ALL))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MarkerSide] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, side: MarkerSide) -> bool {
        self.0.contains(&side)
    }
}

impl Default for MarkerSides {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<Vec<MarkerSide>> for MarkerSides {
    type Error = ChartError;

    fn try_from(value: Vec<MarkerSide>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MarkerSides> for Vec<MarkerSide> {
    fn from(value: MarkerSides) -> Self {
        value.0.into_vec()
    }
}

impl FromStr for MarkerSides {
    type Err = ChartError;

    /// Parses a comma separated list such as `"left, right"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(MarkerSide::from_str)
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(sides)
    }
}

/// Plot-wide marker defaults (`series.marker` in the options tree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOptions {
    pub color: Color,
    pub alignment: MarkerSides,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.5),
            alignment: MarkerSides::all(),
        }
    }
}

impl MarkerOptions {
    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()
    }
}

/// Per-point style overrides. Unset fields fall back to [`MarkerOptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: Option<Color>,
    pub sides: Option<MarkerSides>,
}

impl MarkerStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_sides(mut self, sides: MarkerSides) -> Self {
        self.sides = Some(sides);
        self
    }
}

/// One marked data point with its cached pixel anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedPoint {
    pub target: MarkTarget,
    pub pixel: PixelPoint,
    pub color: Option<Color>,
    pub sides: Option<MarkerSides>,
}

impl MarkedPoint {
    #[must_use]
    pub fn effective_color(&self, options: &MarkerOptions) -> Color {
        self.color.unwrap_or(options.color)
    }

    #[must_use]
    pub fn effective_sides<'a>(&'a self, options: &'a MarkerOptions) -> &'a MarkerSides {
        self.sides.as_ref().unwrap_or(&options.alignment)
    }
}

/// Why a mutator left the store untouched without requesting a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    MissingPoint,
    NonFiniteCoordinate,
    ProjectionFailed,
    InvalidStyle,
    EmptyStore,
}

/// Result of a marker mutation. Mutators never fail; they report this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerOutcome {
    Added,
    AlreadyMarked,
    Removed,
    NotFound,
    Skipped(SkipReason),
}

impl MarkerOutcome {
    #[must_use]
    pub fn requests_redraw(self) -> bool {
        !matches!(self, Self::Skipped(_))
    }

    #[must_use]
    pub fn changed_store(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

/// Insertion-ordered set of marked points keyed by data coordinate.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    points: IndexMap<MarkKey, MarkedPoint>,
}

impl MarkerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn contains(&self, target: &MarkTarget) -> bool {
        self.points.contains_key(&target.key())
    }

    #[must_use]
    pub fn get(&self, target: &MarkTarget) -> Option<&MarkedPoint> {
        self.points.get(&target.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkedPoint> {
        self.points.values()
    }

    /// Marks `point` unless it is already marked.
    ///
    /// An existing entry keeps its first style.
    pub fn add(
        &mut self,
        point: Option<MarkTarget>,
        style: MarkerStyle,
        project: impl Fn(ProjectionRequest) -> ChartResult<PixelPoint>,
    ) -> MarkerOutcome {
        let Some(target) = point else {
            return MarkerOutcome::Skipped(SkipReason::MissingPoint);
        };
        if !target.datapoint().is_finite() {
            return MarkerOutcome::Skipped(SkipReason::NonFiniteCoordinate);
        }
        if let Some(Err(err)) = style.color.map(Color::validate) {
            warn!(error = %err, "skipping marker: invalid color");
            return MarkerOutcome::Skipped(SkipReason::InvalidStyle);
        }

        let key = target.key();
        if self.points.contains_key(&key) {
            debug!(x = key.x.0, y = key.y.0, "point already marked");
            return MarkerOutcome::AlreadyMarked;
        }

        let pixel = match project(projection_request(&target)) {
            Ok(pixel) => pixel,
            Err(err) => {
                warn!(error = %err, x = key.x.0, y = key.y.0, "skipping marker: projection failed");
                return MarkerOutcome::Skipped(SkipReason::ProjectionFailed);
            }
        };

        self.points.insert(
            key,
            MarkedPoint {
                target,
                pixel,
                color: style.color,
                sides: style.sides,
            },
        );
        debug!(x = key.x.0, y = key.y.0, marked = self.points.len(), "marker set");
        MarkerOutcome::Added
    }

    /// Unmarks `point`. Other entries and their styles are left untouched.
    pub fn remove(&mut self, point: Option<&MarkTarget>) -> MarkerOutcome {
        let Some(target) = point else {
            return MarkerOutcome::Skipped(SkipReason::MissingPoint);
        };
        if self.points.is_empty() {
            return MarkerOutcome::Skipped(SkipReason::EmptyStore);
        }

        let key = target.key();
        let outcome = if self.points.shift_remove(&key).is_some() {
            MarkerOutcome::Removed
        } else {
            MarkerOutcome::NotFound
        };
        debug!(
            x = key.x.0,
            y = key.y.0,
            ?outcome,
            marked = self.points.len(),
            "marker unset"
        );
        outcome
    }

    /// Drops every marker and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.points.len();
        self.points.clear();
        if removed > 0 {
            debug!(removed, "markers cleared");
        }
        removed
    }

    /// Recomputes cached pixel anchors, e.g. after the plot was resized.
    ///
    /// Entries whose projection fails keep their previous anchor. Returns the
    /// number of entries updated.
    pub fn reproject(
        &mut self,
        project: impl Fn(ProjectionRequest) -> ChartResult<PixelPoint>,
    ) -> usize {
        let mut updated = 0;
        for (key, marked) in &mut self.points {
            match project(projection_request(&marked.target)) {
                Ok(pixel) => {
                    marked.pixel = pixel;
                    updated += 1;
                }
                Err(err) => {
                    warn!(error = %err, x = key.x.0, y = key.y.0, "keeping stale marker position");
                }
            }
        }
        updated
    }

    /// Draws every marker in insertion order. An empty store draws nothing.
    pub fn render(&self, ctx: &mut dyn DrawingContext, options: &MarkerOptions) -> ChartResult<()> {
        for marked in self.points.values() {
            let color = marked.effective_color(options);
            let sides = marked.effective_sides(options);
            trace!(
                left = marked.pixel.left,
                top = marked.pixel.top,
                sides = sides.len(),
                "drawing marker"
            );

            ctx.set_line_width(MARKER_LINE_WIDTH_PX);
            ctx.set_line_join(LineJoin::Round);
            ctx.begin_path();
            for side in sides.as_slice() {
                trace_pointer(ctx, marked.pixel, *side);
            }
            ctx.close_path();

            ctx.set_fill_color(color);
            ctx.fill()?;
            ctx.set_stroke_color(color);
            ctx.stroke()?;
        }
        Ok(())
    }
}

impl OverlayHook for MarkerStore {
    fn id(&self) -> &str {
        MARKER_PLUGIN_NAME
    }

    fn draw_overlay(
        &mut self,
        ctx: &mut dyn DrawingContext,
        overlay: OverlayContext<'_>,
    ) -> ChartResult<()> {
        self.render(ctx, &overlay.options.series.marker)
    }
}

fn projection_request(target: &MarkTarget) -> ProjectionRequest {
    match target {
        MarkTarget::Coordinate(point) => ProjectionRequest::from_datapoint(*point),
        MarkTarget::Item(item) => ProjectionRequest::from_datapoint(item.datapoint)
            .with_page_position(item.page_x, item.page_y),
    }
}
