//! Placement selection state.
//!
//! A single placement is selected at a time; the external inspector panel
//! renders its editable label and style fields. A selected id whose
//! placement has since been deleted is treated as no selection.

use uuid::Uuid;

use crate::placement::Placement;
use crate::placement_store::PlacementStore;

/// Tracks the currently selected placement.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<Uuid>,
}

impl SelectionManager {
    /// Creates a manager with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected placement id, if any. May be dangling; use
    /// [`resolve`](Self::resolve) to get the placement itself.
    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected_id
    }

    /// Selects a placement. Returns false when the placement was already
    /// selected (a data no-op).
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.selected_id == Some(id) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Clears the selection. Returns false when nothing was selected.
    pub fn clear(&mut self) -> bool {
        self.selected_id.take().is_some()
    }

    /// Resolves the selection against the store. A dangling id resolves
    /// to `None`.
    pub fn resolve<'a>(&self, store: &'a PlacementStore) -> Option<&'a Placement> {
        self.selected_id.and_then(|id| store.get(id))
    }
}
