//! Placement operations (add, delete, copy, paste) and keyboard dispatch.

use fieldkit_core::constants::DEFAULT_PASTE_OFFSET;
use fieldkit_core::field::FieldDescriptor;
use fieldkit_core::geometry::PixelRect;
use uuid::Uuid;

use super::DesignerState;
use crate::events::{DesignerEvent, NotifyLevel};
use crate::keyboard::{KeyInput, ShortcutAction};
use crate::placement::Placement;
use crate::spawn::plan_spawn_rect;

impl DesignerState {
    /// Adds a placement for a dropped field, spawned inside the currently
    /// visible region of the active page, and selects it. Returns `None`
    /// when the page has not produced a valid measurement yet.
    pub fn add_field(&mut self, field: &FieldDescriptor) -> Option<Uuid> {
        let Some(page) = self.viewport.page_size() else {
            tracing::warn!(key = %field.key, "cannot add field before the page is measured");
            self.notify(NotifyLevel::Warning, "The page is still loading");
            return None;
        };
        let visible = self
            .viewport
            .visible_region()
            .unwrap_or_else(|| PixelRect::new(0.0, 0.0, page.width, page.height));

        let previous = self
            .store
            .last_on_page(self.current_page)
            .map(|p| p.rect);
        let rect = plan_spawn_rect(previous.as_ref(), &page, &visible);

        let label = if field.description.is_empty() {
            field.key.clone()
        } else {
            field.description.clone()
        };
        let placement = Placement::with_label(&field.key, label, self.current_page, rect);
        let id = placement.id;

        self.store.insert(placement);
        self.is_modified = true;
        self.select_placement(id);
        self.notify(NotifyLevel::Info, format!("Added field '{}'", field.key));
        Some(id)
    }

    /// Deletes the selected placement. No-op when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let Some(removed) = self.store.remove(id) else {
            return false;
        };
        self.selection.clear();
        self.events.emit(DesignerEvent::SelectionChanged(None));
        self.is_modified = true;
        self.notify(
            NotifyLevel::Info,
            format!("Removed field '{}'", removed.field_key),
        );
        true
    }

    /// Removes every placement bound to a field, used when the field
    /// itself is deleted from the catalog.
    pub fn remove_placements_for_field(&mut self, field_key: &str) -> usize {
        let ids: Vec<Uuid> = self
            .store
            .iter()
            .filter(|p| p.field_key == field_key)
            .map(|p| p.id)
            .collect();
        let had_selection = self.selected_id().is_some();
        for id in &ids {
            self.store.remove(*id);
        }
        if had_selection && self.selected_id().is_none() {
            self.selection.clear();
            self.events.emit(DesignerEvent::SelectionChanged(None));
        }
        if !ids.is_empty() {
            self.is_modified = true;
        }
        ids.len()
    }

    /// Copies the selected placement into the clipboard slot.
    pub fn copy_selected(&mut self) -> bool {
        let Some(placement) = self.selected_placement() else {
            return false;
        };
        let placement = placement.clone();
        self.clipboard.copy(&placement);
        self.notify(
            NotifyLevel::Info,
            format!("Copied field '{}'", placement.field_key),
        );
        true
    }

    /// Pastes the clipboard onto the *current* page with the given
    /// normalized offset, and selects the result. Emits a warning when
    /// the clipboard is empty.
    pub fn paste_here(&mut self, offset_x: f64, offset_y: f64) -> Option<Uuid> {
        let Some(mut placement) = self.clipboard.paste(offset_x, offset_y) else {
            self.notify(NotifyLevel::Warning, "Nothing to paste");
            return None;
        };
        placement.page_index = self.current_page;
        let id = placement.id;
        let field_key = placement.field_key.clone();

        self.store.insert(placement);
        self.is_modified = true;
        self.select_placement(id);
        self.notify(NotifyLevel::Info, format!("Pasted field '{field_key}'"));
        Some(id)
    }

    /// Dispatches a keydown. Returns whether the host should suppress the
    /// platform default for the combination, which is the case only when
    /// a binding matched and its precondition held.
    pub fn handle_key(&mut self, input: KeyInput) -> bool {
        match self.keyboard.route(input) {
            Some(ShortcutAction::Copy) => self.copy_selected(),
            Some(ShortcutAction::Paste) => self
                .paste_here(DEFAULT_PASTE_OFFSET, DEFAULT_PASTE_OFFSET)
                .is_some(),
            Some(ShortcutAction::DeleteSelection) => self.delete_selected(),
            Some(ShortcutAction::ClearSelection) => self.clear_selection(),
            None => false,
        }
    }
}
