//! Coordinate mapping between display space and source space.
//!
//! Regions are stored in *display space*: the pixel grid of the image as it
//! is laid out at 100% zoom, before any zoom transform. The source image has
//! its own native pixel grid (*source space*), usually larger. Every pixel
//! read goes through [`to_source_rect`] first.
//!
//! # Rounding Policy
//!
//! Display-space math stays in `f64` for the whole lifetime of a gesture;
//! rounding to integer pixels happens exactly once, inside
//! [`to_source_rect`]. Rounding intermediate values would accumulate drift
//! over a drag.

use serde::{Deserialize, Serialize};

/// A point in display or client space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in display space. Components are kept in floating point
/// until they are converted to source space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Axis-aligned bounding box of two points.
    pub fn from_points(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Check whether a display-space point falls inside this rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// An integer rectangle on the source image's native pixel grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A width/height pair. Used for both the source image's native size and
/// the rendered size at 100% zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Map a display-space rectangle onto the source pixel grid.
///
/// Scales independently per axis by `original / display`, then rounds each
/// of x, y, width and height to the nearest integer. This is the single
/// place where display coordinates become integer pixels.
///
/// # Example
///
/// A 1000x800 source rendered at 500x400 maps `{100, 100, 100, 100}` to
/// `{200, 200, 200, 200}`.
pub fn to_source_rect(rect: DisplayRect, original: Dimensions, display: Dimensions) -> SourceRect {
    debug_assert!(!original.is_empty() && !display.is_empty());
    let scale_x = original.width as f64 / display.width as f64;
    let scale_y = original.height as f64 / display.height as f64;

    SourceRect {
        x: (rect.x * scale_x).round().max(0.0) as u32,
        y: (rect.y * scale_y).round().max(0.0) as u32,
        width: (rect.width * scale_x).round().max(0.0) as u32,
        height: (rect.height * scale_y).round().max(0.0) as u32,
    }
}

/// Convert a raw client-space pointer position into unzoomed display space.
///
/// `viewport_origin` is the client position of the rendered image's
/// top-left corner; `zoom` is the current zoom factor.
pub fn viewport_point_to_display(client: Point, viewport_origin: Point, zoom: f64) -> Point {
    debug_assert!(zoom > 0.0);
    Point {
        x: (client.x - viewport_origin.x) / zoom,
        y: (client.y - viewport_origin.y) / zoom,
    }
}

/// Clamp a point into `[0, extent]` per axis.
pub fn clamp_point(p: Point, extent: Dimensions) -> Point {
    Point {
        x: p.x.clamp(0.0, extent.width as f64),
        y: p.y.clamp(0.0, extent.height as f64),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
