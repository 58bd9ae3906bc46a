//! Ordered collection of placements keyed by id.
//!
//! Iteration preserves insertion order, which is also the order the
//! persistence boundary serializes. Lookups are linear; a template holds
//! tens of placements, not thousands.

use fieldkit_core::geometry::NormRect;
use uuid::Uuid;

use crate::placement::Placement;

/// Store of all placements in the open template.
#[derive(Debug, Clone, Default)]
pub struct PlacementStore {
    placements: Vec<Placement>,
}

impl PlacementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true when the store holds no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Inserts a placement. If the id is already present the existing
    /// entry is replaced in place, keeping its position in the order.
    pub fn insert(&mut self, placement: Placement) {
        if let Some(existing) = self.placements.iter_mut().find(|p| p.id == placement.id) {
            *existing = placement;
        } else {
            self.placements.push(placement);
        }
    }

    /// Gets a placement by id.
    pub fn get(&self, id: Uuid) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Gets a mutable placement by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Placement> {
        self.placements.iter_mut().find(|p| p.id == id)
    }

    /// Removes a placement by id, returning it if present.
    pub fn remove(&mut self, id: Uuid) -> Option<Placement> {
        let index = self.placements.iter().position(|p| p.id == id)?;
        Some(self.placements.remove(index))
    }

    /// Iterates all placements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Iterates the placements on one page, in insertion order.
    pub fn iter_page(&self, page_index: u32) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.page_index == page_index)
    }

    /// The most recently inserted placement on a page, if any.
    pub fn last_on_page(&self, page_index: u32) -> Option<&Placement> {
        self.iter_page(page_index).last()
    }

    /// Writes a new rect for a placement, clamped into the unit range.
    /// Returns false if the id is unknown.
    pub fn update_rect(&mut self, id: Uuid, rect: NormRect) -> bool {
        match self.get_mut(id) {
            Some(placement) => {
                placement.rect = rect.clamped();
                true
            }
            None => false,
        }
    }

    /// Replaces the whole collection, e.g. after a load or when the
    /// persistence boundary returns a normalized list on save.
    pub fn replace_all(&mut self, placements: Vec<Placement>) {
        self.placements = placements;
    }

    /// Snapshot of the collection for serialization.
    pub fn to_vec(&self) -> Vec<Placement> {
        self.placements.clone()
    }

    /// Removes all placements.
    pub fn clear(&mut self) {
        self.placements.clear();
    }
}
