//! Output encoding and the format auto-selection policy.
//!
//! Per exported raster, unless an explicit override is supplied:
//!
//! 1. Any pixel with alpha below 255 selects PNG (lossless with alpha).
//! 2. Otherwise JPEG, tuned for photographic content: quality 85 for
//!    cropped regions, 92 for the re-encoded original ("template") image.
//!    The template gets the higher quality because it is the reusable
//!    source asset; crops are terminal outputs.
//! 3. Extensions: `jpg` for JPEG, `png` for PNG.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};

use super::ExportError;

/// JPEG quality for cropped regions.
pub const CROP_JPEG_QUALITY: u8 = 85;
/// JPEG quality for the re-encoded template image.
pub const TEMPLATE_JPEG_QUALITY: u8 = 92;

/// What kind of output a raster is, for quality selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// A cropped region.
    Crop,
    /// The re-encoded copy of the full original image.
    Template,
}

impl ExportKind {
    fn jpeg_quality(self) -> u8 {
        match self {
            ExportKind::Crop => CROP_JPEG_QUALITY,
            ExportKind::Template => TEMPLATE_JPEG_QUALITY,
        }
    }
}

/// Chosen output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy photographic format.
    Jpeg { quality: u8 },
    /// Lossless format with alpha.
    Png,
}

impl OutputFormat {
    /// JPEG at the standard crop quality.
    pub fn default_jpeg() -> Self {
        OutputFormat::Jpeg {
            quality: CROP_JPEG_QUALITY,
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// True if any pixel is less than fully opaque.
pub fn has_transparency(raster: &RgbaImage) -> bool {
    raster.pixels().any(|p| p.0[3] < u8::MAX)
}

/// Apply the auto-selection policy to a raster.
pub fn select_format(raster: &RgbaImage, kind: ExportKind) -> OutputFormat {
    if has_transparency(raster) {
        OutputFormat::Png
    } else {
        OutputFormat::Jpeg {
            quality: kind.jpeg_quality(),
        }
    }
}

/// Encode a raster to bytes in the given format.
///
/// JPEG drops the (fully opaque, by selection policy) alpha channel; PNG
/// keeps RGBA as-is.
pub fn encode(raster: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>, ExportError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    match format {
        OutputFormat::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgba8(raster.clone()).to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
            encoder
                .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new(&mut buffer);
            encoder
                .write_image(raster.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
        }
    }
    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
