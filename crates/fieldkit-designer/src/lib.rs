//! # Fieldkit Designer
//!
//! Interactive placement engine for the fieldkit template design tool.
//! An operator visually positions, moves, resizes, duplicates, and
//! removes rectangular placements bound to data fields on a multi-page
//! document. Geometry is stored normalized (fractions of the page's
//! pixel size) so templates are independent of render resolution.
//!
//! ## Core Components
//!
//! - **Placement store**: ordered collection of placements keyed by id
//! - **Viewport**: tracks the rendered page's pixel size and the region
//!   scrolled into view
//! - **Interaction**: per-gesture pointer state machine for moving and
//!   anchor-preserving 8-direction resizing
//! - **Spawn**: visibility-aware rectangle for newly added fields
//! - **Clipboard**: single-slot copy/paste with id regeneration
//! - **Keyboard**: shortcut routing with a text-entry focus guard
//! - **Persistence**: load/save of the placement collection per template
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── PlacementStore (placements, ordered)
//!   ├── SelectionManager (primary selection)
//!   ├── PageViewport (page size + visible region)
//!   ├── InteractionController (move/resize gestures)
//!   ├── Clipboard (single slot)
//!   └── KeyboardRouter (mounted shortcuts)
//!
//! PlacementRepository (external persistence boundary)
//! EventSink (selection changes + notifications to the host UI)
//! ```
//!
//! Everything mutates synchronously inside a pointer or keyboard event
//! callback; there is no background processing in this engine.

pub mod clipboard;
pub mod designer_state;
pub mod events;
pub mod interaction;
pub mod keyboard;
pub mod persistence;
pub mod placement;
pub mod placement_store;
pub mod selection;
pub mod serialization;
pub mod spawn;
pub mod viewport;

pub use clipboard::Clipboard;
pub use designer_state::DesignerState;
pub use events::{BufferedSink, DesignerEvent, EventSink, NotifyLevel, NullSink};
pub use interaction::{InteractionController, ResizeDirection};
pub use keyboard::{Key, KeyInput, KeyboardRouter, ShortcutAction};
pub use persistence::{JsonFileRepository, PersistenceError, PlacementRepository};
pub use placement::{Align, Placement, TextStyle};
pub use placement_store::PlacementStore;
pub use selection::SelectionManager;
pub use serialization::{TemplateFile, TemplateMetadata, FILE_FORMAT_VERSION};
pub use spawn::plan_spawn_rect;
pub use viewport::{MeasureTrigger, PageViewport};
