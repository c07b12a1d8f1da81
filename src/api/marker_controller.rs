use tracing::debug;

use crate::core::MarkTarget;
use crate::extensions::{MarkerOutcome, MarkerSides, MarkerStyle};
use crate::render::Color;

use super::{Plot, PlotHost};

impl<H: PlotHost> Plot<H> {
    /// Marks `point` with an optional color and side override.
    ///
    /// Never fails: a missing or unprojectable point is reported through the
    /// outcome and leaves the overlay untouched. Re-marking an already marked
    /// point keeps its first style.
    pub fn set_marker(
        &mut self,
        point: Option<MarkTarget>,
        color: Option<Color>,
        sides: Option<MarkerSides>,
    ) -> MarkerOutcome {
        self.set_marker_with_style(point, MarkerStyle { color, sides })
    }

    pub fn set_marker_with_style(
        &mut self,
        point: Option<MarkTarget>,
        style: MarkerStyle,
    ) -> MarkerOutcome {
        let host = &self.host;
        let outcome = self
            .markers
            .add(point, style, |request| host.point_to_canvas(request));
        self.finish_marker_mutation(outcome)
    }

    /// Removes the marker on `point`, if any.
    ///
    /// An absent point or an empty overlay is a silent no-op. A point that is
    /// not marked still schedules an overlay pass.
    pub fn unset_marker(&mut self, point: Option<MarkTarget>) -> MarkerOutcome {
        let outcome = self.markers.remove(point.as_ref());
        self.finish_marker_mutation(outcome)
    }

    /// Removes every marker. Returns how many were removed.
    pub fn clear_markers(&mut self) -> usize {
        let removed = self.markers.clear();
        if removed > 0 {
            self.request_overlay_redraw();
        }
        removed
    }

    /// Recomputes marker pixel anchors after the host projection changed,
    /// e.g. on resize or axis rescale.
    pub fn refresh_marker_positions(&mut self) -> usize {
        if self.markers.is_empty() {
            return 0;
        }
        let host = &self.host;
        let updated = self
            .markers
            .reproject(|request| host.point_to_canvas(request));
        debug!(updated, marked = self.markers.len(), "marker positions refreshed");
        self.request_overlay_redraw();
        updated
    }

    fn finish_marker_mutation(&mut self, outcome: MarkerOutcome) -> MarkerOutcome {
        if outcome.requests_redraw() {
            self.request_overlay_redraw();
        }
        outcome
    }
}
