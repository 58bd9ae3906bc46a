//! Visibility-aware spawn rectangle for newly added fields.
//!
//! Operators add many fields in sequence on long pages. Stacking from the
//! page's absolute origin would push new items below the fold, forcing a
//! scroll-and-search after every addition, so spawning anchors to the
//! currently visible region instead.

use fieldkit_core::constants::{
    SPAWN_HEIGHT_FRACTION, SPAWN_MIN_HEIGHT_PX, SPAWN_MIN_WIDTH_PX, SPAWN_PADDING_PX,
    SPAWN_STEP_PX, SPAWN_WIDTH_FRACTION,
};
use fieldkit_core::geometry::{NormRect, PageSize, PixelRect};

/// Computes the normalized rect a new placement should spawn at.
///
/// `previous` is the most recently added placement on the active page.
/// When it exists and its center is still scrolled into view, the new
/// rect steps diagonally from it; otherwise the rect is inset from the
/// top-left of the visible region. Either way the result is clamped to
/// lie fully inside the page, then normalized.
pub fn plan_spawn_rect(
    previous: Option<&NormRect>,
    page: &PageSize,
    visible: &PixelRect,
) -> NormRect {
    if page.is_degenerate() {
        tracing::warn!(?page, "cannot plan spawn rect without a page size");
        return NormRect::ZERO;
    }

    let width = SPAWN_MIN_WIDTH_PX
        .max(SPAWN_WIDTH_FRACTION * page.width)
        .min(page.width);
    let height = SPAWN_MIN_HEIGHT_PX
        .max(SPAWN_HEIGHT_FRACTION * page.height)
        .min(page.height);

    let (left, top) = match previous {
        Some(prev) => {
            let prev_px = prev.to_pixels(page);
            let (cx, cy) = prev_px.center();
            if visible.contains(cx, cy) {
                (prev_px.left + SPAWN_STEP_PX, prev_px.top + SPAWN_STEP_PX)
            } else {
                // Previous placement scrolled out of view: fall back to
                // the visible-region anchor so the new field never spawns
                // off-screen.
                visible_anchor(visible)
            }
        }
        None => visible_anchor(visible),
    };

    let left = left.clamp(0.0, page.width - width);
    let top = top.clamp(0.0, page.height - height);

    PixelRect::new(left, top, width, height).to_norm(page)
}

fn visible_anchor(visible: &PixelRect) -> (f64, f64) {
    (
        visible.left + SPAWN_PADDING_PX,
        visible.top + SPAWN_PADDING_PX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_spawns_inset_from_visible_region() {
        let page = PageSize::new(800.0, 2000.0);
        let visible = PixelRect::new(0.0, 1200.0, 800.0, 600.0);
        let rect = plan_spawn_rect(None, &page, &visible).to_pixels(&page);
        assert_eq!(rect.left, SPAWN_PADDING_PX);
        assert_eq!(rect.top, 1200.0 + SPAWN_PADDING_PX);
    }

    #[test]
    fn test_offsets_from_visible_previous_placement() {
        let page = PageSize::new(800.0, 1000.0);
        let visible = PixelRect::new(0.0, 0.0, 800.0, 1000.0);
        let prev = PixelRect::new(100.0, 100.0, 200.0, 50.0).to_norm(&page);
        let rect = plan_spawn_rect(Some(&prev), &page, &visible).to_pixels(&page);
        assert!((rect.left - (100.0 + SPAWN_STEP_PX)).abs() < 1e-9);
        assert!((rect.top - (100.0 + SPAWN_STEP_PX)).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_page_yields_zero_rect() {
        let visible = PixelRect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            plan_spawn_rect(None, &PageSize::new(0.0, 0.0), &visible),
            NormRect::ZERO
        );
    }
}
