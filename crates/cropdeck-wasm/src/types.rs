//! WASM-compatible wrapper types for image data.
//!
//! The front end hands pixel data across the boundary as flat RGBA
//! buffers (the shape `ImageData` already has); this module wraps them in
//! a type JavaScript can hold on to without re-copying on every call.

use cropdeck_core::export::ExportBlob;
use image::RgbaImage;
use wasm_bindgen::prelude::*;

/// An RGBA raster held in WASM memory.
///
/// # Memory Management
///
/// Pixel data lives in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`. wasm-bindgen's finalizer releases the WASM side
/// automatically, or call `free()` to do it eagerly for large rasters.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a JsImage from dimensions and RGBA pixel data
    /// (4 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns RGBA pixel data as a Uint8Array (copies).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly release WASM memory. Optional.
    pub fn free(self) {}
}

impl JsImage {
    pub(crate) fn from_raster(raster: RgbaImage) -> Self {
        let (width, height) = raster.dimensions();
        Self {
            width,
            height,
            pixels: raster.into_raw(),
        }
    }

    pub(crate) fn to_raster(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// One named export output: an encoded file ready for download or
/// archiving, plus its resolved filename.
#[wasm_bindgen]
pub struct JsExportBlob {
    name: String,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl JsExportBlob {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Encoded file bytes as a Uint8Array (copies).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

impl JsExportBlob {
    pub(crate) fn from_blob(blob: ExportBlob) -> Self {
        Self {
            name: blob.name,
            bytes: blob.bytes,
        }
    }
}
