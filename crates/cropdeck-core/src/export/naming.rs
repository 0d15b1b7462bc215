//! Export file naming.
//!
//! Resolution order for a region's base name: explicit `filename`, then
//! `label`, then `crop-{1-based index}`. Any pre-existing image extension
//! is stripped before the chosen format's extension is appended, so a
//! label of `receipt.png` exported as JPEG becomes `receipt.jpg`, not
//! `receipt.png.jpg`.

use super::OutputFormat;
use crate::region::Region;

/// Extensions recognized as image suffixes when stripping.
const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "webp", "gif", "bmp", "avif", "tiff",
];

/// Strip one trailing image extension, case-insensitively. Non-image
/// suffixes (`report.v2`) are left alone.
pub fn strip_image_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if !stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
            return stem;
        }
    }
    name
}

/// Resolved base name for a region at the given zero-based index.
pub fn region_base_name(region: &Region, index: usize) -> String {
    let explicit = region
        .filename
        .as_deref()
        .or(region.label.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty());
    match explicit {
        Some(name) => strip_image_extension(name).to_string(),
        None => format!("crop-{}", index + 1),
    }
}

/// Name of the re-encoded original inside the archive.
pub fn template_name(format: OutputFormat) -> String {
    format!("template.{}", format.extension())
}

/// Archive file name derived from the original upload's base name.
pub fn archive_name(source_name: Option<&str>) -> String {
    let stem = source_name
        .map(strip_image_extension)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    format!("{stem}-crops.zip")
}
