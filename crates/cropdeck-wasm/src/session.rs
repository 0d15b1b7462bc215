//! Editor session WASM bindings.
//!
//! The front end holds exactly one [`Editor`] per loaded image and drives
//! it with pointer events, zoom controls and detection results. All state
//! (regions, selection, zoom, interaction mode) lives on the Rust side;
//! JavaScript only renders what the accessors return.
//!
//! Pointer coordinates are raw client coordinates; the editor converts
//! them through the viewport transform internally. Call
//! `set_viewport_origin` whenever layout moves the canvas.

use cropdeck_core::detect::{DetectionResponse, DetectionSettings};
use cropdeck_core::geometry::{Dimensions, Point};
use cropdeck_core::interaction::HitTarget;
use cropdeck_core::session::EditorSession;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// The region editor for one loaded image.
#[wasm_bindgen]
pub struct Editor {
    inner: EditorSession,
}

impl Editor {
    pub(crate) fn inner(&self) -> &EditorSession {
        &self.inner
    }
}

#[wasm_bindgen]
impl Editor {
    /// Create an empty editor with no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor {
            inner: EditorSession::new(),
        }
    }

    /// Load a decoded RGBA raster. Replaces the image, both dimension
    /// pairs, and clears all regions and the selection.
    ///
    /// `display_width`/`display_height` are the rendered size at 100%
    /// zoom; `source_name` is the upload's file name, used only for
    /// export naming.
    pub fn load_image(
        &mut self,
        image: &JsImage,
        display_width: u32,
        display_height: u32,
        source_name: Option<String>,
    ) -> Result<(), JsValue> {
        let raster = image
            .to_raster()
            .ok_or_else(|| JsValue::from_str("pixel buffer does not match dimensions"))?;
        self.inner
            .load_image(
                raster,
                Dimensions::new(display_width, display_height),
                source_name,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode and load an encoded image file (the upload path).
    pub fn load_encoded(
        &mut self,
        bytes: &[u8],
        display_width: u32,
        display_height: u32,
        source_name: Option<String>,
    ) -> Result<(), JsValue> {
        self.inner
            .load_encoded(
                bytes,
                Dimensions::new(display_width, display_height),
                source_name,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// "Start over": drop the image, regions, selection and zoom.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Pointer-down. `target` is the hit-test result from the overlay DOM:
    /// `{kind: "canvas"}`, `{kind: "region_body", id}` or
    /// `{kind: "resize_handle", id, handle}` with handle one of
    /// `n|s|e|w|ne|nw|se|sw`.
    pub fn pointer_down(&mut self, x: f64, y: f64, target: JsValue) -> Result<(), JsValue> {
        let target: HitTarget = serde_wasm_bindgen::from_value(target)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.pointer_down(Point::new(x, y), target);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(Point::new(x, y));
    }

    /// Pointer-up. Returns the id of a newly drawn region, if the gesture
    /// committed one.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<String> {
        self.inner.pointer_up(Point::new(x, y))
    }

    /// Abnormal gesture end (pointer left the window, capture lost).
    pub fn pointer_cancel(&mut self) {
        self.inner.pointer_cancel();
    }

    /// All regions in display order, as
    /// `[{id, x, y, width, height, label, filename}, ...]`.
    pub fn regions(&self) -> Result<JsValue, JsValue> {
        let regions: Vec<_> = self.inner.regions().iter().collect();
        serde_wasm_bindgen::to_value(&regions).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn region_count(&self) -> usize {
        self.inner.regions().len()
    }

    /// The in-progress draft rectangle while drawing, or undefined.
    pub fn draft(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.draft())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn selected_region(&self) -> Option<String> {
        self.inner.regions().selected().map(str::to_string)
    }

    /// Explicit selection request (thumbnail click). Pass undefined to
    /// clear.
    pub fn select_region(&mut self, id: Option<String>) {
        self.inner.select_region(id);
    }

    pub fn delete_region(&mut self, id: &str) {
        self.inner.delete_region(id);
    }

    pub fn zoom(&self) -> f64 {
        self.inner.viewport().zoom()
    }

    pub fn zoom_in(&mut self) {
        self.inner.viewport_mut().zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.inner.viewport_mut().zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.inner.viewport_mut().reset_zoom();
    }

    /// Plain-scroll pan, in client pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.inner.viewport_mut().pan_by(dx, dy);
    }

    /// Client position of the canvas's top-left corner; update on layout
    /// change.
    pub fn set_viewport_origin(&mut self, x: f64, y: f64) {
        self.inner.viewport_mut().set_origin(Point::new(x, y));
    }

    /// Symmetric inset correction applied to detection results, in
    /// display pixels. Defaults to zero.
    pub fn set_detection_inset(&mut self, inset: f64) {
        self.inner
            .set_detection_settings(DetectionSettings { inset });
    }

    /// Mark a detection call as outstanding; pointer editing is
    /// suppressed until a result is applied.
    pub fn begin_detection(&mut self) {
        self.inner.begin_detection();
    }

    pub fn detection_pending(&self) -> bool {
        self.inner.detection_pending()
    }

    /// Merge a successful detection response:
    /// `{regions: [{x, y, width, height, label?}, ...], confidence}`.
    /// Returns the outcome as `{status, ...}`.
    pub fn apply_detection(&mut self, response: JsValue) -> Result<JsValue, JsValue> {
        let response: DetectionResponse = serde_wasm_bindgen::from_value(response)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let outcome = self.inner.apply_detection(Ok(response));
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Record a failed detection call. The region collection is left
    /// untouched and editing is re-enabled.
    pub fn fail_detection(&mut self, message: String) -> Result<JsValue, JsValue> {
        let outcome = self.inner.apply_detection(Err(message));
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Crop a region and scale it to fit `max_edge` for a live preview
    /// thumbnail.
    pub fn region_preview(&self, id: &str, max_edge: u32) -> Result<JsImage, JsValue> {
        self.inner
            .region_preview(id, max_edge)
            .map(JsImage::from_raster)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}


/// WASM-specific tests that require JsValue.
///
/// These use `Result<T, JsValue>` methods and only run on wasm32 targets
/// via `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_pointer_down_with_canvas_target() {
        let mut editor = Editor::new();
        let image = JsImage::new(50, 50, vec![255u8; 50 * 50 * 4]);
        editor.load_image(&image, 50, 50, None).unwrap();

        let target = js_sys::JSON::parse(r#"{"kind":"canvas"}"#).unwrap();
        editor.pointer_down(5.0, 5.0, target).unwrap();
        editor.pointer_move(45.0, 45.0);
        assert!(editor.pointer_up(45.0, 45.0).is_some());
    }

    #[wasm_bindgen_test]
    fn test_apply_detection_replaces() {
        let mut editor = Editor::new();
        let image = JsImage::new(200, 200, vec![255u8; 200 * 200 * 4]);
        editor.load_image(&image, 200, 200, None).unwrap();

        let response = js_sys::JSON::parse(
            r#"{"regions":[{"x":0,"y":0,"width":50,"height":50}],"confidence":0.8}"#,
        )
        .unwrap();
        editor.apply_detection(response).unwrap();
        assert_eq!(editor.region_count(), 1);
    }
}
