//! Region model and the ordered region collection.
//!
//! A [`Region`] is one rectangular sub-area of the source image, stored in
//! display-space coordinates. The [`RegionStore`] owns the ordered
//! collection (insertion order = display order = 1-based export numbering)
//! plus the at-most-one selected region id.
//!
//! The minimum-size invariant is enforced here at the store boundary, not
//! just in the pointer gesture code: no committed region is ever smaller
//! than [`MIN_REGION_SIZE`] on either axis.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::DisplayRect;

/// Minimum committed region size on each axis, in display-space pixels.
/// Zoom-independent: the gesture math divides by the zoom factor before
/// this gate is applied.
pub const MIN_REGION_SIZE: f64 = 20.0;

/// Opaque unique region identifier. Assigned at creation, never reused.
pub type RegionId = String;

/// Errors from region store operations.
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    /// The rectangle is below the minimum committed size. This is expected
    /// user behavior (a stray click, an over-aggressive inward resize) and
    /// is discarded rather than surfaced as a failure.
    #[error("Region too small: {width:.1}x{height:.1} (minimum {min}x{min})")]
    TooSmall { width: f64, height: f64, min: u32 },
}

/// One rectangular sub-area of the source image, in display-space
/// coordinates, pending or selected for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique id, stable for the region's lifetime.
    pub id: RegionId,
    /// Position and size in unzoomed display-space pixels.
    #[serde(flatten)]
    pub rect: DisplayRect,
    /// Human-readable tag, from detection or manual entry.
    pub label: Option<String>,
    /// Explicit export base name. Overrides `label` for export naming.
    pub filename: Option<String>,
}

/// Partial update for a region. `None` fields are left untouched, so an
/// all-`None` patch is a no-op that leaves the region byte-for-byte
/// identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub label: Option<String>,
    pub filename: Option<String>,
}

impl RegionPatch {
    /// Patch that moves a region without resizing it.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that replaces the full rectangle.
    pub fn rect(rect: DisplayRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Self::default()
        }
    }
}

/// Ordered collection of regions plus the current selection.
///
/// All operations are synchronous and touch nothing but the collection
/// itself; the source image is never read here.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    selected: Option<RegionId>,
    next_id: u64,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new region, appended to the end of the collection (new
    /// regions always carry the highest index number). Rejects rectangles
    /// below the minimum size.
    pub fn create(
        &mut self,
        rect: DisplayRect,
        label: Option<String>,
    ) -> Result<RegionId, RegionError> {
        check_min_size(rect.width, rect.height)?;
        let id = self.fresh_id();
        self.regions.push(Region {
            id: id.clone(),
            rect,
            label,
            filename: None,
        });
        Ok(id)
    }

    /// Merge a partial update into a region. No-op if the id is absent.
    /// A patch that would shrink the region below the minimum size is
    /// rejected and the region keeps its last valid state.
    pub fn update(&mut self, id: &str, patch: RegionPatch) -> Result<(), RegionError> {
        let Some(region) = self.regions.iter_mut().find(|r| r.id == id) else {
            return Ok(());
        };
        let width = patch.width.unwrap_or(region.rect.width);
        let height = patch.height.unwrap_or(region.rect.height);
        check_min_size(width, height)?;

        if let Some(x) = patch.x {
            region.rect.x = x;
        }
        if let Some(y) = patch.y {
            region.rect.y = y;
        }
        region.rect.width = width;
        region.rect.height = height;
        if let Some(label) = patch.label {
            region.label = Some(label);
        }
        if let Some(filename) = patch.filename {
            region.filename = Some(filename);
        }
        Ok(())
    }

    /// Remove a region. Clears the selection iff the removed region was
    /// selected; deleting any other region leaves the selection alone.
    pub fn delete(&mut self, id: &str) {
        self.regions.retain(|r| r.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Wholesale swap of the collection, used by detection merge and
    /// reset. Fresh ids are assigned and the selection is cleared.
    pub fn replace_all<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = (DisplayRect, Option<String>)>,
    {
        self.regions = regions
            .into_iter()
            .map(|(rect, label)| Region {
                id: self.next_id_value(),
                rect,
                label,
                filename: None,
            })
            .collect();
        self.selected = None;
    }

    /// Remove every region and clear the selection.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.selected = None;
    }

    /// Select a region by id, or clear the selection with `None`.
    /// Selecting an id that is not in the collection is a no-op.
    pub fn select(&mut self, id: Option<RegionId>) {
        match id {
            None => self.selected = None,
            Some(id) => {
                if self.regions.iter().any(|r| r.id == id) {
                    self.selected = Some(id);
                }
            }
        }
    }

    /// Currently selected region id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Currently selected region, if any.
    pub fn selected_region(&self) -> Option<&Region> {
        let id = self.selected.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Regions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn fresh_id(&mut self) -> RegionId {
        self.next_id_value()
    }

    fn next_id_value(&mut self) -> RegionId {
        self.next_id += 1;
        format!("region-{}", self.next_id)
    }
}

fn check_min_size(width: f64, height: f64) -> Result<(), RegionError> {
    if width < MIN_REGION_SIZE || height < MIN_REGION_SIZE {
        return Err(RegionError::TooSmall {
            width,
            height,
            min: MIN_REGION_SIZE as u32,
        });
    }
    Ok(())
}
