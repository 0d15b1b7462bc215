//! Export pipeline: crop, encode, name and archive regions.
//!
//! Given a region and the dimensions pair, the pipeline maps the region to
//! the source pixel grid, crops exactly that rectangle into a fresh raster,
//! picks an output encoding by inspecting the raster, and yields named byte
//! blobs ready for download or archiving.
//!
//! Batch export is atomic: the first crop or encode failure aborts the
//! remaining regions and nothing partial is returned.

mod archive;
mod crop;
mod encode;
mod naming;

pub use archive::build_archive;
pub use crop::{crop_region, thumbnail};
pub use encode::{
    encode, has_transparency, select_format, ExportKind, OutputFormat, CROP_JPEG_QUALITY,
    TEMPLATE_JPEG_QUALITY,
};
pub use naming::{archive_name, region_base_name, strip_image_extension, template_name};

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::Dimensions;
use crate::region::Region;

/// Errors raised by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No source image is loaded in the session.
    #[error("No source image loaded")]
    NoImage,

    /// Batch export was requested with an empty region collection.
    #[error("No regions to export")]
    NothingToExport,

    /// A region id was not found in the collection.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// The mapped source rectangle has zero area after rounding.
    #[error("Mapped crop rectangle has zero area")]
    EmptyCrop,

    /// The mapped source rectangle starts entirely outside the source.
    #[error("Crop origin ({x}, {y}) outside {width}x{height} source")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Raster-to-bytes conversion failed.
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Writing the archive failed.
    #[error("Archive write failed: {0}")]
    Archive(String),
}

/// One named output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Export a single region as one encoded blob with its resolved name.
///
/// `index` is the region's zero-based position in the collection, used for
/// the `crop-{n}` fallback name. An explicit `format` overrides the
/// alpha-based auto-selection.
pub fn export_region(
    image: &RgbaImage,
    region: &Region,
    index: usize,
    original: Dimensions,
    display: Dimensions,
    format: Option<OutputFormat>,
) -> Result<ExportBlob, ExportError> {
    let raster = crop_region(image, region.rect, original, display)?;
    let format = format.unwrap_or_else(|| select_format(&raster, ExportKind::Crop));
    let bytes = encode(&raster, format)?;
    let name = format!(
        "{}.{}",
        region_base_name(region, index),
        format.extension()
    );
    log::debug!("exported region {} as {} ({} bytes)", region.id, name, bytes.len());
    Ok(ExportBlob { name, bytes })
}

/// Export every region plus the re-encoded original ("template") as one
/// archive blob.
///
/// The archive contains one file per region in collection order, named via
/// `filename` / `label` / `crop-{n}`, plus `template.<ext>` - the original
/// image re-encoded at higher quality since it is the reusable source
/// asset, while crops are terminal outputs.
///
/// Fails atomically: any crop or encode error aborts the whole batch.
pub fn export_all<'a, I>(
    image: &RgbaImage,
    regions: I,
    original: Dimensions,
    display: Dimensions,
    source_name: Option<&str>,
    format: Option<OutputFormat>,
) -> Result<ExportBlob, ExportError>
where
    I: IntoIterator<Item = &'a Region>,
{
    let mut blobs = Vec::new();
    for (index, region) in regions.into_iter().enumerate() {
        blobs.push(export_region(image, region, index, original, display, format)?);
    }
    if blobs.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    // The template rides along at higher quality.
    let template_format =
        format.unwrap_or_else(|| select_format(image, ExportKind::Template));
    let template_bytes = encode(image, template_format)?;
    blobs.push(ExportBlob {
        name: template_name(template_format),
        bytes: template_bytes,
    });

    let bytes = build_archive(&blobs)?;
    let name = archive_name(source_name);
    log::info!(
        "built archive {} with {} entries ({} bytes)",
        name,
        blobs.len(),
        bytes.len()
    );
    Ok(ExportBlob { name, bytes })
}
