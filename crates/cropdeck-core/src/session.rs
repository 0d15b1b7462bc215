//! The editor session: one explicit context object owning the image, the
//! dimension pairs, the region collection, the viewport and the
//! interaction state.
//!
//! Everything that was ambient state in earlier iterations of this product
//! lives here, so replacing the image atomically swaps image + dimensions
//! + regions + selection in one call, and "start over" is a single reset.
//!
//! While a detection call is outstanding the session is read-only for
//! pointer editing: pointer-downs are suppressed so a manual edit cannot
//! race the wholesale region replacement that follows.

use image::RgbaImage;
use thiserror::Error;

use crate::detect::{corrected_rect, DetectionOutcome, DetectionResponse, DetectionSettings};
use crate::export::{self, ExportBlob, ExportError, OutputFormat};
use crate::geometry::{Dimensions, DisplayRect, Point};
use crate::interaction::{self, GestureContext, HitTarget, InteractionState};
use crate::region::{RegionId, RegionStore};
use crate::viewport::Viewport;

/// Errors loading a source image into the session.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a decodable image.
    #[error("Invalid or unsupported image data: {0}")]
    InvalidFormat(String),

    /// The decoded image or the display layout has zero area.
    #[error("Image has zero area")]
    EmptyImage,
}

/// Editing session for one loaded image.
#[derive(Debug, Default)]
pub struct EditorSession {
    image: Option<RgbaImage>,
    source_name: Option<String>,
    original: Dimensions,
    display: Dimensions,
    regions: RegionStore,
    viewport: Viewport,
    interaction: InteractionState,
    detection_pending: bool,
    detection_settings: DetectionSettings,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a decoded image, atomically replacing image + dimension pairs
    /// and clearing regions, selection, interaction and zoom.
    ///
    /// `display` is the rendered size at 100% zoom; `source_name` is the
    /// upload's file name, kept only for export naming.
    pub fn load_image(
        &mut self,
        image: RgbaImage,
        display: Dimensions,
        source_name: Option<String>,
    ) -> Result<(), DecodeError> {
        if image.width() == 0 || image.height() == 0 || display.is_empty() {
            return Err(DecodeError::EmptyImage);
        }
        self.original = Dimensions::new(image.width(), image.height());
        self.display = display;
        self.image = Some(image);
        self.source_name = source_name;
        self.regions.clear();
        self.interaction = InteractionState::Idle;
        self.viewport.reset_for_extent(display);
        self.detection_pending = false;
        log::info!(
            "loaded image {}x{} displayed at {}x{}",
            self.original.width,
            self.original.height,
            display.width,
            display.height
        );
        Ok(())
    }

    /// Decode and load an encoded image (the upload path).
    pub fn load_encoded(
        &mut self,
        bytes: &[u8],
        display: Dimensions,
        source_name: Option<String>,
    ) -> Result<(), DecodeError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?
            .to_rgba8();
        self.load_image(decoded, display, source_name)
    }

    /// "Start over": drop the image, regions, selection and zoom.
    pub fn reset(&mut self) {
        *self = Self {
            detection_settings: self.detection_settings,
            ..Self::default()
        };
        log::info!("session reset");
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn original_dimensions(&self) -> Dimensions {
        self.original
    }

    pub fn display_dimensions(&self) -> Dimensions {
        self.display
    }

    pub fn regions(&self) -> &RegionStore {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut RegionStore {
        &mut self.regions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// The in-progress draft rectangle while drawing, for overlay
    /// rendering.
    pub fn draft(&self) -> Option<DisplayRect> {
        self.interaction.draft()
    }

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            zoom: self.viewport.zoom(),
            origin: self.viewport.origin(),
            extent: self.viewport.extent(),
        }
    }

    /// Pointer-down against the viewport. Ignored while a detection call
    /// is outstanding (read-only mode) or before an image is loaded.
    pub fn pointer_down(&mut self, client: Point, target: HitTarget) {
        if self.detection_pending {
            log::debug!("pointer-down suppressed: detection outstanding");
            return;
        }
        if self.image.is_none() {
            return;
        }
        let ctx = self.gesture_context();
        interaction::pointer_down(&mut self.interaction, &mut self.regions, &ctx, client, target);
    }

    pub fn pointer_move(&mut self, client: Point) {
        let ctx = self.gesture_context();
        interaction::pointer_move(&mut self.interaction, &mut self.regions, &ctx, client);
    }

    /// Pointer-up. Returns the id of a newly drawn region, if one was
    /// committed.
    pub fn pointer_up(&mut self, client: Point) -> Option<RegionId> {
        let ctx = self.gesture_context();
        interaction::pointer_up(&mut self.interaction, &mut self.regions, &ctx, client)
    }

    /// Abnormal gesture end: pointer left the window or capture was lost.
    pub fn pointer_cancel(&mut self) {
        interaction::pointer_cancel(&mut self.interaction);
    }

    /// Explicit selection request (e.g. clicking a preview thumbnail).
    /// Does not touch the interaction machine.
    pub fn select_region(&mut self, id: Option<RegionId>) {
        self.regions.select(id);
    }

    pub fn delete_region(&mut self, id: &str) {
        self.regions.delete(id);
    }

    pub fn detection_settings(&self) -> DetectionSettings {
        self.detection_settings
    }

    pub fn set_detection_settings(&mut self, settings: DetectionSettings) {
        self.detection_settings = settings;
    }

    pub fn detection_pending(&self) -> bool {
        self.detection_pending
    }

    /// Mark a detection call as outstanding. Pointer editing is suppressed
    /// until [`apply_detection`](Self::apply_detection) lands.
    pub fn begin_detection(&mut self) {
        self.detection_pending = true;
        // A gesture in flight when the call goes out is abandoned.
        interaction::pointer_cancel(&mut self.interaction);
    }

    /// Merge a detection result. Non-empty success wholesale-replaces the
    /// collection and clears the selection; an empty result or an error
    /// leaves the collection untouched.
    pub fn apply_detection(
        &mut self,
        result: Result<DetectionResponse, String>,
    ) -> DetectionOutcome {
        self.detection_pending = false;
        match result {
            Err(message) => {
                log::warn!("detection failed: {message}");
                DetectionOutcome::Failed { message }
            }
            Ok(response) if response.regions.is_empty() => {
                log::info!("detection found no regions");
                DetectionOutcome::NoRegions
            }
            Ok(response) => {
                let settings = self.detection_settings;
                let count = response.regions.len();
                self.regions.replace_all(
                    response
                        .regions
                        .iter()
                        .map(|r| (corrected_rect(r, settings), r.label.clone())),
                );
                log::info!(
                    "detection replaced regions: {} at confidence {:.2}",
                    count,
                    response.confidence
                );
                DetectionOutcome::Replaced {
                    count,
                    confidence: response.confidence,
                }
            }
        }
    }

    /// Crop a region and scale it down for a preview thumbnail.
    pub fn region_preview(&self, id: &str, max_edge: u32) -> Result<RgbaImage, ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::NoImage)?;
        let region = self
            .regions
            .get(id)
            .ok_or_else(|| ExportError::UnknownRegion(id.to_string()))?;
        let raster = export::crop_region(image, region.rect, self.original, self.display)?;
        Ok(export::thumbnail(&raster, max_edge))
    }

    /// Export one region as an encoded blob for direct download.
    pub fn export_region(
        &self,
        id: &str,
        format: Option<OutputFormat>,
    ) -> Result<ExportBlob, ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::NoImage)?;
        let (index, region) = self
            .regions
            .iter()
            .enumerate()
            .find(|(_, r)| r.id == id)
            .ok_or_else(|| ExportError::UnknownRegion(id.to_string()))?;
        export::export_region(image, region, index, self.original, self.display, format)
    }

    /// Export all regions plus the template as one archive blob.
    pub fn export_all(&self, format: Option<OutputFormat>) -> Result<ExportBlob, ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::NoImage)?;
        export::export_all(
            image,
            self.regions.iter(),
            self.original,
            self.display,
            self.source_name.as_deref(),
            format,
        )
    }
}
