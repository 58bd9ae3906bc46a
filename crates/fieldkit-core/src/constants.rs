//! Shared numeric constants for the designer.

/// Minimum placement width in pixels at mutation time.
pub const MIN_PLACEMENT_WIDTH_PX: f64 = 24.0;

/// Minimum placement height in pixels at mutation time.
pub const MIN_PLACEMENT_HEIGHT_PX: f64 = 18.0;

/// Lower bound for the derived page render width.
pub const MIN_PAGE_WIDTH_PX: f64 = 280.0;

/// Upper bound for the derived page render width.
pub const MAX_PAGE_WIDTH_PX: f64 = 1200.0;

/// Measurements under this size in either axis are implausible and discarded.
pub const MEASUREMENT_FLOOR_PX: f64 = 50.0;

/// Inset from the visible region's top-left when spawning on an empty page.
pub const SPAWN_PADDING_PX: f64 = 24.0;

/// Diagonal step applied when spawning relative to the previous placement.
pub const SPAWN_STEP_PX: f64 = 14.0;

/// Minimum spawn width; widened to a quarter of the page when that is larger.
pub const SPAWN_MIN_WIDTH_PX: f64 = 140.0;
pub const SPAWN_WIDTH_FRACTION: f64 = 0.25;

/// Minimum spawn height; 4% of the page height when that is larger.
pub const SPAWN_MIN_HEIGHT_PX: f64 = 42.0;
pub const SPAWN_HEIGHT_FRACTION: f64 = 0.04;

/// Default normalized offset applied when pasting via the keyboard.
pub const DEFAULT_PASTE_OFFSET: f64 = 0.02;
