//! Cropdeck WASM - WebAssembly bindings for Cropdeck
//!
//! This crate exposes the cropdeck-core region editor to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - The stateful [`Editor`]: image loading, pointer gestures,
//!   zoom, selection and detection results
//! - `export` - Single-region and batch (zip) export
//! - `types` - WASM-compatible wrapper types for rasters and export blobs
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor, export_all } from '@cropdeck/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new Editor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! editor.load_encoded(bytes, displayWidth, displayHeight, file.name);
//!
//! canvas.onpointerdown = (e) =>
//!   editor.pointer_down(e.clientX, e.clientY, hitTest(e));
//!
//! const archive = export_all(editor);
//! download(archive.name, archive.bytes());
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod session;
mod types;

// Re-export public types
pub use export::{export_all, export_region};
pub use session::Editor;
pub use types::{JsExportBlob, JsImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
