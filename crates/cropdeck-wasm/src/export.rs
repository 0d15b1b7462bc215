//! Export bindings.
//!
//! Single-region export returns one encoded file; `export_all` returns a
//! zip archive containing every crop plus the full template image. Both
//! hand back a [`JsExportBlob`] the front end turns into a download.

use cropdeck_core::export::OutputFormat;
use wasm_bindgen::prelude::*;

use crate::session::Editor;
use crate::types::JsExportBlob;

fn parse_format(format: Option<String>) -> Result<Option<OutputFormat>, JsValue> {
    match format.as_deref() {
        None | Some("auto") => Ok(None),
        Some("jpeg") | Some("jpg") => Ok(Some(OutputFormat::default_jpeg())),
        Some("png") => Ok(Some(OutputFormat::Png)),
        Some(other) => Err(JsValue::from_str(&format!(
            "unknown export format: {other}"
        ))),
    }
}

/// Export one region as an encoded image file.
///
/// `format` is `"auto"` (or undefined), `"jpeg"` or `"png"`. Auto picks
/// PNG when the crop contains any transparency and JPEG otherwise.
#[wasm_bindgen]
pub fn export_region(
    editor: &Editor,
    id: &str,
    format: Option<String>,
) -> Result<JsExportBlob, JsValue> {
    let format = parse_format(format)?;
    editor
        .inner()
        .export_region(id, format)
        .map(JsExportBlob::from_blob)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Export every region plus the original image as a single zip archive.
///
/// Fails without producing a partial archive if any region cannot be
/// cropped or encoded.
#[wasm_bindgen]
pub fn export_all(editor: &Editor, format: Option<String>) -> Result<JsExportBlob, JsValue> {
    let format = parse_format(format)?;
    editor
        .inner()
        .export_all(format)
        .map(JsExportBlob::from_blob)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
