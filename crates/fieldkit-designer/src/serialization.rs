//! Template file serialization.
//!
//! Templates persist as JSON: a version string, metadata, and the ordered
//! placement list. Unknown fields are tolerated and missing optional ones
//! defaulted, so newer writers stay readable by older readers.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::placement::Placement;

/// Template file format version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete persisted template document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub version: String,
    pub metadata: TemplateMetadata,
    pub placements: Vec<Placement>,
}

/// Template metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl TemplateFile {
    /// Creates an empty template document with fresh timestamps.
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: TemplateMetadata {
                name: name.to_string(),
                created: now,
                modified: now,
                description: String::new(),
            },
            placements: Vec::new(),
        }
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("failed to serialize template")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write template file {}", path.display()))?;
        Ok(())
    }

    /// Reads a document back from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template file {}", path.display()))?;
        let file: Self = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse template file {}", path.display()))?;
        Ok(file)
    }
}
