//! Pointer event forwarding into the interaction controller.
//!
//! Pointer-down on a placement body starts a move, pointer-down on a
//! resize handle starts a resize; either one also makes the placement the
//! selection. The page size used for all commits is captured here, at
//! gesture start, so a viewport re-measurement mid-gesture cannot shift
//! the geometry under the operator's pointer.

use uuid::Uuid;

use super::DesignerState;
use crate::interaction::ResizeDirection;

impl DesignerState {
    /// Pointer-down on a placement body. Ignored while another gesture is
    /// active or before the page has a valid size.
    pub fn begin_move_gesture(&mut self, id: Uuid, pointer: (f64, f64)) -> bool {
        if self.interaction.is_active() {
            return false;
        }
        let Some(page) = self.viewport.page_size() else {
            return false;
        };
        if !self.interaction.begin_move(&self.store, id, pointer, page) {
            return false;
        }
        self.select_placement(id);
        true
    }

    /// Pointer-down on one of the eight resize handles.
    pub fn begin_resize_gesture(
        &mut self,
        id: Uuid,
        direction: ResizeDirection,
        pointer: (f64, f64),
    ) -> bool {
        if self.interaction.is_active() {
            return false;
        }
        let Some(page) = self.viewport.page_size() else {
            return false;
        };
        if !self
            .interaction
            .begin_resize(&self.store, id, direction, pointer, page)
        {
            return false;
        }
        self.select_placement(id);
        true
    }

    /// Pointer-move during a gesture; commits the new rect immediately.
    pub fn pointer_moved(&mut self, pointer: (f64, f64)) -> bool {
        let committed = self.interaction.pointer_move(&mut self.store, pointer);
        if committed {
            self.is_modified = true;
        }
        committed
    }

    /// Pointer-up: ends the gesture and releases capture.
    pub fn pointer_released(&mut self) -> Option<Uuid> {
        self.interaction.pointer_up()
    }

    /// Pointer-cancel: ends the gesture at the last committed rect.
    pub fn pointer_cancelled(&mut self) -> Option<Uuid> {
        self.interaction.pointer_cancel()
    }
}
