//! Resolution-independent rectangle geometry.
//!
//! Handles conversion between normalized coordinates (fractions of the
//! page, stored in templates) and pixel coordinates (the currently
//! rendered page). Normalized components are kept inside [0, 1] so a
//! template survives any render resolution unchanged.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of the currently rendered page.
///
/// Ephemeral: owned by viewport sizing, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// Creates a new page size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true when the size cannot support a coordinate transform
    /// (zero or negative dimension, or non-finite).
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// A rectangle in normalized page coordinates.
///
/// Each component is a fraction of the page's pixel size: `x`/`w` of the
/// width, `y`/`h` of the height. All components are expected to stay in
/// [0, 1]; [`PixelRect::to_norm`] enforces this on every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl NormRect {
    /// The zero rectangle, used when no meaningful geometry exists.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    /// Creates a new normalized rectangle.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Returns a copy with every component clamped into [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            x: clamp_unit(self.x),
            y: clamp_unit(self.y),
            w: clamp_unit(self.w),
            h: clamp_unit(self.h),
        }
    }

    /// Converts to pixel coordinates for the given page.
    ///
    /// Pure linear scaling, total for any input:
    /// ```text
    /// left  = x * page_width      width  = w * page_width
    /// top   = y * page_height     height = h * page_height
    /// ```
    pub fn to_pixels(&self, page: &PageSize) -> PixelRect {
        PixelRect {
            left: self.x * page.width,
            top: self.y * page.height,
            width: self.w * page.width,
            height: self.h * page.height,
        }
    }
}

/// A rectangle in the pixel space of a rendered page.
///
/// `left`/`top` are offsets from the page's top-left corner. Also used
/// for the visible region of the scrollable host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Creates a new pixel rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts to normalized coordinates for the given page.
    ///
    /// Inverse of [`NormRect::to_pixels`], with every output component
    /// clamped into [0, 1]. A degenerate page (zero dimension) yields the
    /// zero rect rather than propagating NaN or infinity.
    pub fn to_norm(&self, page: &PageSize) -> NormRect {
        if page.is_degenerate() {
            tracing::debug!(?page, "degenerate page size, returning zero rect");
            return NormRect::ZERO;
        }
        NormRect {
            x: clamp_unit(self.left / page.width),
            y: clamp_unit(self.top / page.height),
            w: clamp_unit(self.width / page.width),
            h: clamp_unit(self.height / page.height),
        }
    }

    /// Right edge coordinate.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge coordinate.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Tests whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_scales_linearly() {
        let rect = NormRect::new(0.25, 0.5, 0.5, 0.1);
        let px = rect.to_pixels(&PageSize::new(800.0, 1000.0));
        assert_eq!(px.left, 200.0);
        assert_eq!(px.top, 500.0);
        assert_eq!(px.width, 400.0);
        assert_eq!(px.height, 100.0);
    }

    #[test]
    fn test_to_norm_zero_page_yields_zero_rect() {
        let px = PixelRect::new(100.0, 100.0, 50.0, 50.0);
        assert_eq!(px.to_norm(&PageSize::new(0.0, 1000.0)), NormRect::ZERO);
        assert_eq!(px.to_norm(&PageSize::new(800.0, 0.0)), NormRect::ZERO);
        assert_eq!(px.to_norm(&PageSize::new(f64::NAN, 1000.0)), NormRect::ZERO);
    }

    #[test]
    fn test_to_norm_clamps_out_of_page_input() {
        let page = PageSize::new(800.0, 600.0);
        let rect = PixelRect::new(-50.0, 900.0, 2000.0, -10.0).to_norm(&page);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 1.0);
        assert_eq!(rect.w, 1.0);
        assert_eq!(rect.h, 0.0);
    }

    #[test]
    fn test_center_and_contains() {
        let px = PixelRect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(px.center(), (60.0, 40.0));
        assert!(px.contains(10.0, 20.0));
        assert!(px.contains(110.0, 60.0));
        assert!(!px.contains(111.0, 60.0));
    }
}
