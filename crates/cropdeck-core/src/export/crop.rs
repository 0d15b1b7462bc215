//! Cropping a region out of the source raster.
//!
//! The display-space rectangle is mapped to the source grid once, via
//! [`to_source_rect`], and the output buffer is exactly the rounded source
//! rectangle's size. Because output size equals the rounded rectangle, the
//! pixel grids align 1:1 and rows can be copied directly; resampling (used
//! by [`thumbnail`]) only enters the picture when a caller asks for a
//! different output size.
//!
//! A region is allowed to overhang the source image after rounding (the
//! display layout can be a fraction wider than the scaled source). Pixels
//! outside the source stay fully transparent, which also steers the format
//! auto-selection toward PNG for such crops.

use image::{imageops, RgbaImage};

use super::ExportError;
use crate::geometry::{to_source_rect, Dimensions, DisplayRect};

const BYTES_PER_PIXEL: usize = 4;

/// Crop the source rectangle mapped from `rect` into a new raster of
/// exactly the mapped width x height.
pub fn crop_region(
    image: &RgbaImage,
    rect: DisplayRect,
    original: Dimensions,
    display: Dimensions,
) -> Result<RgbaImage, ExportError> {
    if display.is_empty() {
        return Err(ExportError::InvalidDimensions {
            width: display.width,
            height: display.height,
        });
    }

    let src = to_source_rect(rect, original, display);
    if src.width == 0 || src.height == 0 {
        return Err(ExportError::EmptyCrop);
    }
    if src.x >= image.width() || src.y >= image.height() {
        return Err(ExportError::OutOfBounds {
            x: src.x,
            y: src.y,
            width: image.width(),
            height: image.height(),
        });
    }

    // Zero-initialized: RGBA(0,0,0,0), fully transparent.
    let mut output = RgbaImage::new(src.width, src.height);

    // Overlap between the requested rectangle and the actual source.
    let copy_width = (image.width() - src.x).min(src.width) as usize;
    let copy_height = (image.height() - src.y).min(src.height) as usize;

    let src_stride = image.width() as usize * BYTES_PER_PIXEL;
    let dst_stride = src.width as usize * BYTES_PER_PIXEL;
    let src_raw = image.as_raw();
    let dst_raw: &mut [u8] = &mut output;

    for row in 0..copy_height {
        let src_start = (src.y as usize + row) * src_stride + src.x as usize * BYTES_PER_PIXEL;
        let dst_start = row * dst_stride;
        let len = copy_width * BYTES_PER_PIXEL;
        dst_raw[dst_start..dst_start + len]
            .copy_from_slice(&src_raw[src_start..src_start + len]);
    }

    Ok(output)
}

/// Scale a raster down to fit within `max_edge` on its longer side, using
/// high-quality (Catmull-Rom) interpolation. Used for live preview
/// thumbnails, which re-derive their pixels from the source via
/// [`crop_region`] on every region change. Rasters already within the
/// bound are returned unscaled.
pub fn thumbnail(raster: &RgbaImage, max_edge: u32) -> RgbaImage {
    let (width, height) = raster.dimensions();
    let longest = width.max(height);
    if longest <= max_edge || max_edge == 0 {
        return raster.clone();
    }
    let scale = max_edge as f64 / longest as f64;
    let out_w = ((width as f64 * scale).round() as u32).max(1);
    let out_h = ((height as f64 * scale).round() as u32).max(1);
    imageops::resize(raster, out_w, out_h, imageops::FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::positional_image;
    use super::*;

    fn dims(w: u32, h: u32) -> Dimensions {
        Dimensions::new(w, h)
    }

    #[test]
    fn test_crop_identity_scale() {
        let image = positional_image(100, 100);
        let out = crop_region(
            &image,
            DisplayRect::new(20.0, 30.0, 40.0, 50.0),
            dims(100, 100),
            dims(100, 100),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (40, 50));
        // Top-left pixel of the crop is source pixel (20, 30).
        assert_eq!(out.get_pixel(0, 0), image.get_pixel(20, 30));
        // Bottom-right pixel is source pixel (59, 79).
        assert_eq!(out.get_pixel(39, 49), image.get_pixel(59, 79));
    }

    #[test]
    fn test_crop_scales_display_to_source() {
        // 1000x800 source displayed at 500x400: a 100x100 display region
        // becomes a 200x200 source crop.
        let image = positional_image(1000, 800);
        let out = crop_region(
            &image,
            DisplayRect::new(100.0, 100.0, 100.0, 100.0),
            dims(1000, 800),
            dims(500, 400),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (200, 200));
        assert_eq!(out.get_pixel(0, 0), image.get_pixel(200, 200));
    }

    #[test]
    fn test_crop_overhang_pads_transparent() {
        let image = positional_image(100, 100);
        // 30px of the 50px-wide region hangs off the right edge.
        let out = crop_region(
            &image,
            DisplayRect::new(80.0, 0.0, 50.0, 40.0),
            dims(100, 100),
            dims(100, 100),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (50, 40));
        // In-bounds part is copied.
        assert_eq!(out.get_pixel(0, 0), image.get_pixel(80, 0));
        assert_eq!(out.get_pixel(19, 0), image.get_pixel(99, 0));
        // Overhang is fully transparent.
        assert_eq!(out.get_pixel(20, 0).0[3], 0);
        assert_eq!(out.get_pixel(49, 39).0[3], 0);
    }

    #[test]
    fn test_crop_zero_area_is_error() {
        let image = positional_image(1, 1);
        // A 30px display region against a 1px source rounds to zero.
        let result = crop_region(
            &image,
            DisplayRect::new(10.0, 10.0, 30.0, 30.0),
            dims(1, 1),
            dims(500, 400),
        );
        assert!(matches!(result, Err(ExportError::EmptyCrop)));
    }

    #[test]
    fn test_crop_origin_outside_source_is_error() {
        let image = positional_image(50, 50);
        let result = crop_region(
            &image,
            DisplayRect::new(80.0, 80.0, 30.0, 30.0),
            dims(50, 50),
            dims(100, 100),
        );
        assert!(matches!(result, Err(ExportError::OutOfBounds { .. })));
    }

    #[test]
    fn test_crop_empty_display_dims_is_error() {
        let image = positional_image(50, 50);
        let result = crop_region(
            &image,
            DisplayRect::new(0.0, 0.0, 30.0, 30.0),
            dims(50, 50),
            dims(0, 0),
        );
        assert!(matches!(result, Err(ExportError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_thumbnail_preserves_aspect() {
        let raster = positional_image(400, 200);
        let thumb = thumbnail(&raster, 100);
        assert_eq!(thumb.dimensions(), (100, 50));
    }

    #[test]
    fn test_thumbnail_small_raster_untouched() {
        let raster = positional_image(60, 40);
        let thumb = thumbnail(&raster, 100);
        assert_eq!(thumb.dimensions(), (60, 40));
        assert_eq!(thumb.as_raw(), raster.as_raw());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
