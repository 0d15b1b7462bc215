//! Cropdeck Core - Region editing and export library
//!
//! This crate provides the interactive region-editing core for Cropdeck:
//! the in-memory region model, the pointer-driven create/move/resize state
//! machine operating in a zoomed scrollable viewport, the display-to-source
//! coordinate mapping, and the export pipeline that turns regions into
//! individually encoded image files or a single archive.
//!
//! # Coordinate Spaces
//!
//! Regions are stored in *display space* (the rendered layout at 100%
//! zoom); the uploaded image has its own *source space* pixel grid. The
//! [`geometry`] module is the single place where one becomes the other,
//! and it is used identically by preview rendering, single-image export
//! and batch export.

pub mod detect;
pub mod export;
pub mod geometry;
pub mod interaction;
pub mod region;
pub mod session;
pub mod viewport;

pub use detect::{DetectedRegion, DetectionOutcome, DetectionResponse, DetectionSettings};
pub use export::{ExportBlob, ExportError, ExportKind, OutputFormat};
pub use geometry::{to_source_rect, Dimensions, DisplayRect, Point, SourceRect};
pub use interaction::{Handle, HitTarget, InteractionState};
pub use region::{Region, RegionId, RegionPatch, RegionStore, MIN_REGION_SIZE};
pub use session::{DecodeError, EditorSession};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
