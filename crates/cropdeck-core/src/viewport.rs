//! Zoom and scroll state for the editing viewport.
//!
//! The viewport owns the zoom factor and the scroll offset, and knows the
//! logical extent of the rendered image at 100% zoom. It never touches
//! stored regions: zoom and scroll only change rendering and the math the
//! interaction layer uses on the next pointer event.
//!
//! Zoom changes only happen through the explicit operations below (the
//! front end maps a modifier-scroll or toolbar button to them); a plain
//! scroll pans.

use crate::geometry::{Dimensions, Point};

/// Lowest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.5;
/// Highest allowed zoom factor.
pub const MAX_ZOOM: f64 = 4.0;
/// Zoom increment per step.
pub const ZOOM_STEP: f64 = 0.15;

/// Viewport state: zoom factor, scroll offset and the client-space origin
/// of the rendered content.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    scroll: Point,
    origin: Point,
    extent: Dimensions,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            scroll: Point::default(),
            origin: Point::default(),
            extent: Dimensions::default(),
        }
    }
}

impl Viewport {
    pub fn new(extent: Dimensions) -> Self {
        Self {
            extent,
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Increase zoom by one step, clamped to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Decrease zoom by one step, clamped to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Back to 100%.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Scroll offset in client pixels.
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Pan by a client-space delta. The offset is clamped so the content
    /// cannot be scrolled past its scaled size.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let max_x = (self.extent.width as f64 * self.zoom).max(0.0);
        let max_y = (self.extent.height as f64 * self.zoom).max(0.0);
        self.scroll.x = (self.scroll.x + dx).clamp(0.0, max_x);
        self.scroll.y = (self.scroll.y + dy).clamp(0.0, max_y);
    }

    /// Client position of the content's top-left corner. Updated by the
    /// embedder whenever layout changes.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Logical extent of the rendered image at 100% zoom. Drag and draw
    /// clamping happens against this.
    pub fn extent(&self) -> Dimensions {
        self.extent
    }

    /// Replace the extent (new image loaded). Zoom and scroll are reset
    /// along with it.
    pub fn reset_for_extent(&mut self, extent: Dimensions) {
        self.extent = extent;
        self.zoom = 1.0;
        self.scroll = Point::default();
    }
}
