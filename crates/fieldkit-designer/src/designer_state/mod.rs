//! Designer state manager for UI integration.
//!
//! Ties the placement store, selection, viewport sizing, interaction
//! controller, clipboard, and keyboard router together behind one
//! mutation surface. The hosting UI forwards pointer and keyboard events
//! here and reacts to the [`DesignerEvent`]s emitted in return.
//!
//! Split into submodules:
//! - `placements`: add/delete/copy/paste and keyboard dispatch
//! - `pointer`: gesture begin/move/end forwarding
//! - `template_io`: load/save through the persistence boundary

mod placements;
mod pointer;
mod template_io;

use uuid::Uuid;

use crate::clipboard::Clipboard;
use crate::events::{DesignerEvent, EventSink, NotifyLevel, NullSink};
use crate::interaction::InteractionController;
use crate::keyboard::KeyboardRouter;
use crate::placement::Placement;
use crate::placement_store::PlacementStore;
use crate::selection::SelectionManager;
use crate::viewport::PageViewport;

/// Designer state for UI integration.
pub struct DesignerState {
    pub store: PlacementStore,
    pub viewport: PageViewport,
    pub clipboard: Clipboard,
    pub interaction: InteractionController,
    pub keyboard: KeyboardRouter,
    selection: SelectionManager,
    events: Box<dyn EventSink>,
    current_page: u32,
    /// True when local edits exist that have not been saved.
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a state that drops its events.
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullSink))
    }

    /// Creates a state delivering events into the given sink.
    pub fn with_sink(events: Box<dyn EventSink>) -> Self {
        Self {
            store: PlacementStore::new(),
            viewport: PageViewport::new(),
            clipboard: Clipboard::new(),
            interaction: InteractionController::new(),
            keyboard: KeyboardRouter::new(),
            selection: SelectionManager::new(),
            events,
            current_page: 0,
            is_modified: false,
        }
    }

    /// The page index new fields and pastes target.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Switches the active page. The host re-measures afterwards; the
    /// stale scroll position is dropped here.
    pub fn set_current_page(&mut self, page_index: u32) {
        if self.current_page != page_index {
            self.current_page = page_index;
            self.viewport.reset_visible_region();
        }
    }

    /// Mounts the designer: keyboard shortcuts become active.
    pub fn mount(&mut self) {
        self.keyboard.mount();
    }

    /// Unmounts the designer: keyboard shortcuts are torn down.
    pub fn unmount(&mut self) {
        self.keyboard.unmount();
    }

    /// The selected placement id, with a dangling selection reported as
    /// no selection.
    pub fn selected_id(&self) -> Option<Uuid> {
        self.selection.resolve(&self.store).map(|p| p.id)
    }

    /// The selected placement itself, if the selection resolves.
    pub fn selected_placement(&self) -> Option<&Placement> {
        self.selection.resolve(&self.store)
    }

    /// Selects a placement. Unknown ids are ignored; re-selecting the
    /// current selection is a data no-op and emits nothing.
    pub fn select_placement(&mut self, id: Uuid) -> bool {
        if self.store.get(id).is_none() {
            tracing::debug!(%id, "select ignored, placement does not exist");
            return false;
        }
        if self.selection.select(id) {
            self.events.emit(DesignerEvent::SelectionChanged(Some(id)));
            true
        } else {
            false
        }
    }

    /// Clears the selection. No-op when nothing is selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.clear() {
            self.events.emit(DesignerEvent::SelectionChanged(None));
            true
        } else {
            false
        }
    }

    pub(crate) fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.events.emit(DesignerEvent::Notify {
            level,
            message: message.into(),
        });
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
