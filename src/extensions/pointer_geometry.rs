use crate::core::PixelPoint;
use crate::extensions::MarkerSide;
use crate::render::DrawingContext;

/// Distance from the marked point to the pointer tip.
pub const POINTER_OFFSET_PX: f64 = 8.0;
/// Half of the pointer base width.
pub const POINTER_HALF_BASE_PX: f64 = 4.2;
/// Distance from the pointer tip to its base.
pub const POINTER_DEPTH_PX: f64 = 3.6;

/// Closed triangle for one side of a marker: tip, base corners, tip again.
///
/// The tip points at `anchor`; the base lies further out along `side`.
#[must_use]
pub fn pointer_outline(anchor: PixelPoint, side: MarkerSide) -> [PixelPoint; 4] {
    let PixelPoint { left, top } = anchor;
    match side {
        MarkerSide::Top => {
            let tip = PixelPoint::new(left, top - POINTER_OFFSET_PX);
            let base = top - POINTER_OFFSET_PX - POINTER_DEPTH_PX;
            [
                tip,
                PixelPoint::new(left - POINTER_HALF_BASE_PX, base),
                PixelPoint::new(left + POINTER_HALF_BASE_PX, base),
                tip,
            ]
        }
        MarkerSide::Left => {
            let tip = PixelPoint::new(left - POINTER_OFFSET_PX, top);
            let base = left - POINTER_OFFSET_PX - POINTER_DEPTH_PX;
            [
                tip,
                PixelPoint::new(base, top - POINTER_HALF_BASE_PX),
                PixelPoint::new(base, top + POINTER_HALF_BASE_PX),
                tip,
            ]
        }
        MarkerSide::Right => {
            let tip = PixelPoint::new(left + POINTER_OFFSET_PX, top);
            let base = left + POINTER_OFFSET_PX + POINTER_DEPTH_PX;
            [
                tip,
                PixelPoint::new(base, top - POINTER_HALF_BASE_PX),
                PixelPoint::new(base, top + POINTER_HALF_BASE_PX),
                tip,
            ]
        }
        MarkerSide::Bottom => {
            let tip = PixelPoint::new(left, top + POINTER_OFFSET_PX);
            let base = top + POINTER_OFFSET_PX + POINTER_DEPTH_PX;
            [
                tip,
                PixelPoint::new(left - POINTER_HALF_BASE_PX, base),
                PixelPoint::new(left + POINTER_HALF_BASE_PX, base),
                tip,
            ]
        }
    }
}

/// Appends the pointer outline as a sub-path of the current path.
pub fn trace_pointer(ctx: &mut dyn DrawingContext, anchor: PixelPoint, side: MarkerSide) {
    let [tip, first, second, closing] = pointer_outline(anchor, side);
    ctx.move_to(tip.left, tip.top);
    ctx.line_to(first.left, first.top);
    ctx.line_to(second.left, second.top);
    ctx.line_to(closing.left, closing.top);
}

#[cfg(test)]
mod tests {
    use super::pointer_outline;
    use crate::core::PixelPoint;
    use crate::extensions::MarkerSide;

    fn assert_close(actual: PixelPoint, expected: (f64, f64)) {
        assert!(
            (actual.left - expected.0).abs() <= 1e-9 && (actual.top - expected.1).abs() <= 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn left_pointer_opens_towards_negative_x() {
        let outline = pointer_outline(PixelPoint::new(50.0, 20.0), MarkerSide::Left);
        assert_close(outline[0], (42.0, 20.0));
        assert_close(outline[1], (38.4, 15.8));
        assert_close(outline[2], (38.4, 24.2));
        assert_close(outline[3], (42.0, 20.0));
    }

    #[test]
    fn bottom_pointer_mirrors_top_pointer() {
        let anchor = PixelPoint::new(10.0, 10.0);
        let top = pointer_outline(anchor, MarkerSide::Top);
        let bottom = pointer_outline(anchor, MarkerSide::Bottom);
        for (up, down) in top.iter().zip(bottom.iter()) {
            assert!((up.left - down.left).abs() <= 1e-9);
            assert!(((anchor.top - up.top) - (down.top - anchor.top)).abs() <= 1e-9);
        }
    }
}
