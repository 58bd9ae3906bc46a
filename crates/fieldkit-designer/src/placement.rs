//! Placement model: a rectangular region on a document page bound to a
//! data field, with position and text style.

use fieldkit_core::geometry::NormRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Horizontal text alignment inside a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Text styling for a placement. No layout is performed here; `multiline`
/// only flags whether the renderer may wrap instead of truncating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

fn default_line_height() -> f64 {
    1.2
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            align: Align::Left,
            multiline: false,
            line_height: default_line_height(),
        }
    }
}

/// A field placement on a document page.
///
/// Geometry is normalized (fractions of the page's pixel size) so the
/// placement is independent of render resolution. `page_index` bounds are
/// the caller's concern; this engine only requires it to be non-negative,
/// which the type enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: Uuid,
    pub field_key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub page_index: u32,
    pub rect: NormRect,
    #[serde(default)]
    pub style: TextStyle,
}

impl Placement {
    /// Creates a placement with a fresh id and default style.
    pub fn new(field_key: impl Into<String>, page_index: u32, rect: NormRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            field_key: field_key.into(),
            label: None,
            page_index,
            rect,
            style: TextStyle::default(),
        }
    }

    /// Creates a placement with an explicit label.
    pub fn with_label(
        field_key: impl Into<String>,
        label: impl Into<String>,
        page_index: u32,
        rect: NormRect,
    ) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(field_key, page_index, rect)
        }
    }
}
