//! Persistence boundary for placement collections.
//!
//! The boundary is external to this engine: the designer hands it a full
//! snapshot on save and wholesale-adopts whatever it returns, since the
//! backing service may normalize values. [`JsonFileRepository`] is the
//! file-backed implementation used by the desktop host and by tests.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use thiserror::Error;

use crate::placement::Placement;
use crate::serialization::TemplateFile;

/// Errors a repository can report beyond plain I/O failures.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// No template exists under the given id.
    #[error("template '{id}' not found")]
    TemplateNotFound {
        /// The requested template id.
        id: String,
    },
}

/// Load/save of the placement collection, scoped by template id.
pub trait PlacementRepository {
    /// Loads the ordered placement list for a template.
    fn load(&self, template_id: &str) -> Result<Vec<Placement>>;

    /// Saves a snapshot and returns the stored list, which replaces the
    /// caller's collection on success (the boundary may normalize values).
    fn save(&self, template_id: &str, placements: &[Placement]) -> Result<Vec<Placement>>;
}

/// Repository storing one JSON template file per id under a root
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn template_path(&self, template_id: &str) -> PathBuf {
        self.root.join(format!("{template_id}.json"))
    }
}

impl PlacementRepository for JsonFileRepository {
    fn load(&self, template_id: &str) -> Result<Vec<Placement>> {
        let path = self.template_path(template_id);
        if !path.exists() {
            return Err(PersistenceError::TemplateNotFound {
                id: template_id.to_string(),
            }
            .into());
        }
        let file = TemplateFile::load_from_file(&path)?;
        tracing::debug!(template_id, count = file.placements.len(), "template loaded");
        Ok(file.placements)
    }

    fn save(&self, template_id: &str, placements: &[Placement]) -> Result<Vec<Placement>> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create template dir {}", self.root.display()))?;

        let path = self.template_path(template_id);
        // Preserve the creation timestamp across re-saves.
        let mut file = match TemplateFile::load_from_file(&path) {
            Ok(existing) => existing,
            Err(_) => TemplateFile::new(template_id),
        };
        file.metadata.modified = Utc::now();
        file.placements = placements.to_vec();
        file.save_to_file(&path)?;

        tracing::debug!(template_id, count = placements.len(), "template saved");
        Ok(file.placements)
    }
}
