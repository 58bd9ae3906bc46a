//! Field catalog descriptors.
//!
//! The catalog itself lives outside this engine; these are the tuples it
//! supplies for labelling new placements. `key` is treated as an opaque
//! string throughout.

use serde::{Deserialize, Serialize};

/// One entry of the field catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Opaque key the placement binds to.
    pub key: String,
    /// Declared value type of the field ("text", "date", ...).
    pub kind: String,
    /// Human-readable description, used as the default placement label.
    #[serde(default)]
    pub description: String,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    pub fn new(
        key: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}
