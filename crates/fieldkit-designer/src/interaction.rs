//! Pointer gesture state machine for moving and resizing placements.
//!
//! One gesture runs at a time: pointer-down on a placement body starts a
//! move, pointer-down on one of the eight resize handles starts an
//! anchor-preserving resize. Every pointer-move commits the candidate
//! rect to the store immediately (converted through the page size
//! captured at gesture start), so pointer-up and pointer-cancel both
//! simply end the gesture at the last committed rect.

use fieldkit_core::constants::{MIN_PLACEMENT_HEIGHT_PX, MIN_PLACEMENT_WIDTH_PX};
use fieldkit_core::geometry::{NormRect, PageSize, PixelRect};
use uuid::Uuid;

use crate::placement_store::PlacementStore;

/// Compass direction of the dragged resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// Which edges the handle drags, as (north, south, east, west).
    fn edges(self) -> (bool, bool, bool, bool) {
        match self {
            ResizeDirection::North => (true, false, false, false),
            ResizeDirection::South => (false, true, false, false),
            ResizeDirection::East => (false, false, true, false),
            ResizeDirection::West => (false, false, false, true),
            ResizeDirection::NorthEast => (true, false, true, false),
            ResizeDirection::NorthWest => (true, false, false, true),
            ResizeDirection::SouthEast => (false, true, true, false),
            ResizeDirection::SouthWest => (false, true, false, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureMode {
    Move,
    Resize(ResizeDirection),
}

/// Ephemeral per-gesture state, created on pointer-down and destroyed on
/// pointer-up or cancel.
#[derive(Debug, Clone)]
struct GestureSession {
    placement_id: Uuid,
    mode: GestureMode,
    pointer_origin: (f64, f64),
    rect_at_start: PixelRect,
    norm_at_start: NormRect,
    /// Page size captured once at gesture start and used through the
    /// whole gesture, even if the viewport re-measures meanwhile.
    page_size: PageSize,
}

/// Converts pointer deltas into rect commits for the active gesture.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    session: Option<GestureSession>,
    pointer_captured: bool,
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true while the controller holds pointer capture. The host
    /// acquires platform capture when this becomes true so fast pointer
    /// movement outside the element does not abort the gesture.
    pub fn has_pointer_capture(&self) -> bool {
        self.pointer_captured
    }

    /// The placement the active gesture is editing, if any.
    pub fn active_placement(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.placement_id)
    }

    /// Starts a move gesture. Returns false when another gesture is
    /// already active, the placement is unknown, or the page size cannot
    /// support a transform.
    pub fn begin_move(
        &mut self,
        store: &PlacementStore,
        id: Uuid,
        pointer: (f64, f64),
        page_size: PageSize,
    ) -> bool {
        self.begin(store, id, GestureMode::Move, pointer, page_size)
    }

    /// Starts a resize gesture on one of the eight handles.
    pub fn begin_resize(
        &mut self,
        store: &PlacementStore,
        id: Uuid,
        direction: ResizeDirection,
        pointer: (f64, f64),
        page_size: PageSize,
    ) -> bool {
        self.begin(store, id, GestureMode::Resize(direction), pointer, page_size)
    }

    fn begin(
        &mut self,
        store: &PlacementStore,
        id: Uuid,
        mode: GestureMode,
        pointer: (f64, f64),
        page_size: PageSize,
    ) -> bool {
        if self.session.is_some() {
            // A second pointer-down during an active gesture is ignored.
            tracing::debug!(%id, "pointer-down ignored, gesture already active");
            return false;
        }
        if page_size.is_degenerate() || !pointer.0.is_finite() || !pointer.1.is_finite() {
            return false;
        }
        let Some(placement) = store.get(id) else {
            tracing::debug!(%id, "pointer-down on unknown placement");
            return false;
        };

        self.session = Some(GestureSession {
            placement_id: id,
            mode,
            pointer_origin: pointer,
            rect_at_start: placement.rect.to_pixels(&page_size),
            norm_at_start: placement.rect,
            page_size,
        });
        self.pointer_captured = true;
        true
    }

    /// Feeds a pointer-move into the active gesture and commits the
    /// resulting rect. Returns false when idle or the event was guarded.
    pub fn pointer_move(&mut self, store: &mut PlacementStore, pointer: (f64, f64)) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !pointer.0.is_finite() || !pointer.1.is_finite() {
            return false;
        }

        let dx = pointer.0 - session.pointer_origin.0;
        let dy = pointer.1 - session.pointer_origin.1;
        let candidate = match session.mode {
            GestureMode::Move => moved_rect(session.rect_at_start, dx, dy),
            GestureMode::Resize(direction) => resized_rect(session.rect_at_start, direction, dx, dy),
        };

        // Zero net movement commits the exact starting rect so the
        // gesture is byte-for-byte a no-op.
        let rect = if candidate == session.rect_at_start {
            session.norm_at_start
        } else {
            candidate.to_norm(&session.page_size)
        };
        store.update_rect(session.placement_id, rect)
    }

    /// Ends the gesture on pointer-up, releasing capture. Returns the
    /// edited placement id.
    pub fn pointer_up(&mut self) -> Option<Uuid> {
        self.pointer_captured = false;
        self.session.take().map(|s| s.placement_id)
    }

    /// Ends the gesture on pointer-cancel (e.g. capture revoked by the
    /// platform). The placement stays at its last committed rect; commits
    /// are continuous so there is nothing to roll back.
    pub fn pointer_cancel(&mut self) -> Option<Uuid> {
        let ended = self.pointer_up();
        if let Some(id) = ended {
            tracing::debug!(%id, "gesture cancelled");
        }
        ended
    }
}

fn moved_rect(start: PixelRect, dx: f64, dy: f64) -> PixelRect {
    PixelRect::new(start.left + dx, start.top + dy, start.width, start.height)
}

/// Applies an anchor-preserving resize: each edge implied by the compass
/// direction moves by the pointer delta on its axis, and dragging a west
/// or north edge shifts left/top so the opposite edge stays fixed on
/// screen. When a dimension would drop under its floor it is pinned to
/// the floor and the anchored coordinate adjusted by exactly the
/// shortfall, so only the dragged edge appears to stop.
fn resized_rect(start: PixelRect, direction: ResizeDirection, dx: f64, dy: f64) -> PixelRect {
    let (north, south, east, west) = direction.edges();

    let mut left = start.left;
    let mut top = start.top;
    let mut width = start.width;
    let mut height = start.height;

    if east {
        width = start.width + dx;
    }
    if west {
        left = start.left + dx;
        width = start.width - dx;
    }
    if south {
        height = start.height + dy;
    }
    if north {
        top = start.top + dy;
        height = start.height - dy;
    }

    if width < MIN_PLACEMENT_WIDTH_PX {
        let shortfall = MIN_PLACEMENT_WIDTH_PX - width;
        if west {
            left -= shortfall;
        }
        width = MIN_PLACEMENT_WIDTH_PX;
    }
    if height < MIN_PLACEMENT_HEIGHT_PX {
        let shortfall = MIN_PLACEMENT_HEIGHT_PX - height;
        if north {
            top -= shortfall;
        }
        height = MIN_PLACEMENT_HEIGHT_PX;
    }

    PixelRect::new(left, top, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_rect_east_keeps_left_and_top() {
        let start = PixelRect::new(100.0, 100.0, 200.0, 100.0);
        let out = resized_rect(start, ResizeDirection::East, 30.0, 999.0);
        assert_eq!(out, PixelRect::new(100.0, 100.0, 230.0, 100.0));
    }

    #[test]
    fn test_resized_rect_west_anchors_right_edge() {
        let start = PixelRect::new(100.0, 100.0, 200.0, 100.0);
        let out = resized_rect(start, ResizeDirection::West, 50.0, 0.0);
        assert_eq!(out, PixelRect::new(150.0, 100.0, 150.0, 100.0));
        assert_eq!(out.right(), start.right());
    }

    #[test]
    fn test_resized_rect_west_floor_keeps_anchor_fixed() {
        let start = PixelRect::new(100.0, 100.0, 200.0, 100.0);
        // Dragging far past the floor: width pins, right edge unmoved.
        let out = resized_rect(start, ResizeDirection::West, 500.0, 0.0);
        assert_eq!(out.width, MIN_PLACEMENT_WIDTH_PX);
        assert_eq!(out.right(), start.right());
    }

    #[test]
    fn test_resized_rect_north_floor_keeps_anchor_fixed() {
        let start = PixelRect::new(100.0, 100.0, 200.0, 100.0);
        let out = resized_rect(start, ResizeDirection::North, 0.0, 400.0);
        assert_eq!(out.height, MIN_PLACEMENT_HEIGHT_PX);
        assert_eq!(out.bottom(), start.bottom());
    }

    #[test]
    fn test_resized_rect_never_negative() {
        let start = PixelRect::new(0.0, 0.0, 40.0, 30.0);
        for direction in [
            ResizeDirection::North,
            ResizeDirection::South,
            ResizeDirection::East,
            ResizeDirection::West,
            ResizeDirection::NorthEast,
            ResizeDirection::NorthWest,
            ResizeDirection::SouthEast,
            ResizeDirection::SouthWest,
        ] {
            let out = resized_rect(start, direction, -1000.0, -1000.0);
            assert!(out.width >= MIN_PLACEMENT_WIDTH_PX);
            assert!(out.height >= MIN_PLACEMENT_HEIGHT_PX);
        }
    }
}
