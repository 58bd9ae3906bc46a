//! Load/save through the persistence boundary.

use anyhow::Result;

use super::DesignerState;
use crate::events::NotifyLevel;
use crate::persistence::PlacementRepository;

impl DesignerState {
    /// Loads a template, wholesale-replacing the placement collection.
    /// On failure the local collection is left untouched.
    pub fn load_template(
        &mut self,
        repository: &dyn PlacementRepository,
        template_id: &str,
    ) -> Result<()> {
        match repository.load(template_id) {
            Ok(placements) => {
                let count = placements.len();
                self.store.replace_all(placements);
                self.clear_selection();
                self.is_modified = false;
                self.notify(NotifyLevel::Info, format!("Loaded {count} fields"));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(template_id, error = %err, "template load failed");
                self.notify(NotifyLevel::Error, format!("Load failed: {err}"));
                Err(err)
            }
        }
    }

    /// Saves the full current snapshot. On success the boundary's
    /// returned list replaces the local collection, since the backing
    /// service may normalize values; on failure nothing changes locally
    /// and the operator can retry. Not transactional with respect to
    /// further edits; the last explicit save wins.
    pub fn save_template(
        &mut self,
        repository: &dyn PlacementRepository,
        template_id: &str,
    ) -> Result<()> {
        let snapshot = self.store.to_vec();
        match repository.save(template_id, &snapshot) {
            Ok(normalized) => {
                self.store.replace_all(normalized);
                self.is_modified = false;
                self.notify(NotifyLevel::Info, "Template saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(template_id, error = %err, "template save failed");
                self.notify(NotifyLevel::Error, format!("Save failed: {err}"));
                Err(err)
            }
        }
    }
}
