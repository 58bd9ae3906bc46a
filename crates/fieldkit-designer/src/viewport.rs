//! Page viewport sizing.
//!
//! Tracks the pixel size of the currently rendered page and the region of
//! it scrolled into view. The page width is derived from the hosting
//! container's available width, bounded to a sane range; the height comes
//! from the rendered page element's measured bounding box, since pages
//! can differ in intrinsic size and no aspect ratio is assumed.
//!
//! Sizing is continuously observed, not polled: the host reports a fresh
//! measurement whenever the container resizes, the page index changes, or
//! the renderer signals render-complete. Implausibly small measurements
//! are discarded and the previous valid size retained.

use fieldkit_core::constants::{MAX_PAGE_WIDTH_PX, MEASUREMENT_FLOOR_PX, MIN_PAGE_WIDTH_PX};
use fieldkit_core::geometry::{PageSize, PixelRect};

/// What prompted a re-measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTrigger {
    ContainerResize,
    PageChange,
    RenderComplete,
}

/// Pixel size of the visible page plus the scrolled-into-view region.
#[derive(Debug, Clone, Default)]
pub struct PageViewport {
    page_size: Option<PageSize>,
    visible_region: Option<PixelRect>,
}

impl PageViewport {
    /// Creates an unmeasured viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last accepted page size, if any measurement succeeded yet.
    pub fn page_size(&self) -> Option<PageSize> {
        self.page_size
    }

    /// Records a measurement. `container_width` is the hosting container's
    /// available width; `page_height` is the rendered page element's
    /// measured height. Returns whether the measurement was accepted.
    ///
    /// A reading under the plausibility floor in either axis, or a
    /// non-finite one, is discarded and the previous size kept.
    pub fn record_measurement(
        &mut self,
        trigger: MeasureTrigger,
        container_width: f64,
        page_height: f64,
    ) -> bool {
        if !container_width.is_finite()
            || !page_height.is_finite()
            || container_width < MEASUREMENT_FLOOR_PX
            || page_height < MEASUREMENT_FLOOR_PX
        {
            tracing::warn!(
                ?trigger,
                container_width,
                page_height,
                "implausible page measurement discarded"
            );
            return false;
        }

        let size = PageSize::new(
            container_width.clamp(MIN_PAGE_WIDTH_PX, MAX_PAGE_WIDTH_PX),
            page_height,
        );
        tracing::debug!(?trigger, ?size, "page size updated");
        self.page_size = Some(size);
        true
    }

    /// Updates the region of the page currently scrolled into view.
    pub fn set_visible_region(&mut self, region: PixelRect) {
        self.visible_region = Some(region);
    }

    /// The visible region, defaulting to the full page when the host has
    /// never reported a scroll position.
    pub fn visible_region(&self) -> Option<PixelRect> {
        self.visible_region.or_else(|| {
            self.page_size
                .map(|page| PixelRect::new(0.0, 0.0, page.width, page.height))
        })
    }

    /// Forgets the scroll position, e.g. when navigating to another page.
    pub fn reset_visible_region(&mut self) {
        self.visible_region = None;
    }
}
