//! Wire contract and merge policy for the remote region-detection service.
//!
//! The service receives the encoded source image plus the *display-space*
//! dimensions, and returns candidate regions with a confidence score. The
//! coordinate convention is fixed here once: **returned regions are
//! display-space pixels against the dimensions sent in the request**.
//! Earlier iterations of this product flip-flopped between scaling against
//! source and display dimensions; everything in this crate assumes display
//! and the adapter on the other side must scale accordingly.
//!
//! The optional inset correction (some detectors over-shoot region borders
//! by a fixed margin) is an explicit, tested parameter - never an implicit
//! fudge baked into the merge.

use serde::{Deserialize, Serialize};

use crate::geometry::DisplayRect;

/// One candidate region from the detection service, in display-space
/// pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Successful detection payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub regions: Vec<DetectedRegion>,
    pub confidence: f32,
}

/// Tunable corrections applied to raw detection output before merging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Symmetric inset in display pixels: each region edge is pulled
    /// inward by this amount. Defaults to zero (no correction).
    pub inset: f64,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self { inset: 0.0 }
    }
}

/// Result of merging a detection response into the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetectionOutcome {
    /// The region collection was wholesale-replaced.
    Replaced { count: usize, confidence: f32 },
    /// The service found nothing; the collection is untouched.
    NoRegions,
    /// The call failed or returned a malformed response; the collection is
    /// untouched.
    Failed { message: String },
}

/// Convert a detected region to a display rect, applying the inset
/// correction symmetrically. Size never goes negative.
pub fn corrected_rect(region: &DetectedRegion, settings: DetectionSettings) -> DisplayRect {
    let inset = settings.inset;
    DisplayRect {
        x: region.x + inset,
        y: region.y + inset,
        width: (region.width - 2.0 * inset).max(0.0),
        height: (region.height - 2.0 * inset).max(0.0),
    }
}
