//! # Fieldkit Core
//!
//! Core types for the fieldkit template designer: resolution-independent
//! rectangle geometry, page measurement types, and the field catalog
//! descriptors that placements bind to.
//!
//! Geometry is stored in normalized form (fractions of the page's pixel
//! size) so a template renders identically regardless of the resolution
//! the document happens to be rasterized at. Conversion to and from the
//! pixel space of the currently rendered page lives in [`geometry`].

pub mod constants;
pub mod field;
pub mod geometry;

pub use field::FieldDescriptor;
pub use geometry::{NormRect, PageSize, PixelRect};
