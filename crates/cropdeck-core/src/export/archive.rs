//! Archive collaborator: package named byte blobs into one zip.
//!
//! Entries are keyed by filename with insertion order preserved, so the
//! archive layout is deterministic for a given export. A repeated name
//! replaces the earlier content but keeps the first insertion's position,
//! exactly like inserting into an ordered map. Image payloads are already
//! compressed, but deflate still trims the container metadata and any PNG
//! entries compress a little further.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{ExportBlob, ExportError};

/// Build a single zip blob from the given entries.
pub fn build_archive(blobs: &[ExportBlob]) -> Result<Vec<u8>, ExportError> {
    // Key by filename: last content wins, first position wins.
    let mut entries: Vec<&ExportBlob> = Vec::with_capacity(blobs.len());
    for blob in blobs {
        match entries.iter().position(|e| e.name == blob.name) {
            Some(i) => entries[i] = blob,
            None => entries.push(blob),
        }
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for blob in entries {
        writer
            .start_file(blob.name.as_str(), options)
            .map_err(|e| ExportError::Archive(e.to_string()))?;
        writer
            .write_all(&blob.bytes)
            .map_err(|e| ExportError::Archive(e.to_string()))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ExportError::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}
