//! Single-slot placement clipboard.
//!
//! Holds at most one copied placement by value. Pasting mints a fresh id
//! and shifts the position; the caller stamps the active page index onto
//! the result, so paste targets "here" rather than the source page.

use uuid::Uuid;

use crate::placement::Placement;

/// Copy/paste slot for one placement.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Placement>,
}

impl Clipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value copy of the placement, replacing any prior copy.
    pub fn copy(&mut self, placement: &Placement) {
        self.slot = Some(placement.clone());
    }

    /// Returns true when something has been copied. Used for user
    /// feedback before attempting a paste.
    pub fn has_contents(&self) -> bool {
        self.slot.is_some()
    }

    /// Produces a pasteable placement: shape-identical to the copy, with
    /// a fresh id and x/y shifted by the normalized offset, each clamped
    /// to [0, 1]. Width and height pass through unchanged. Returns `None`
    /// when nothing has been copied.
    pub fn paste(&self, offset_x: f64, offset_y: f64) -> Option<Placement> {
        let source = self.slot.as_ref()?;
        let mut placement = source.clone();
        placement.id = Uuid::new_v4();
        placement.rect.x = (placement.rect.x + offset_x).clamp(0.0, 1.0);
        placement.rect.y = (placement.rect.y + offset_y).clamp(0.0, 1.0);
        Some(placement)
    }
}
