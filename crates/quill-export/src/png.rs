//! PNG export format
//!
//! Exports rendered drawings to PNG using the `image` crate.

use image::{ImageBuffer, ImageEncoder, RgbaImage};
use quill_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, RenderOutput},
};

use crate::{bitmap_only, rgba_pixels};

/// Encode an RGBA bitmap as PNG.
///
/// Returns a valid PNG with proper IHDR, IDAT, and IEND chunks.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    let pixels = rgba_pixels(bitmap)?;

    let img: RgbaImage = ImageBuffer::from_raw(bitmap.width, bitmap.height, pixels.to_vec())
        .ok_or_else(|| {
            ExportError::EncodingFailed("Failed to create image buffer from RGBA data".into())
        })?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), bitmap.width, bitmap.height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    log::debug!(
        "PNG export: {}x{}, {} bytes",
        bitmap.width,
        bitmap.height,
        png_data.len()
    );
    Ok(png_data)
}

/// PNG exporter for raster drawings
///
/// ```
/// use quill_core::Exporter;
/// use quill_export::PngExporter;
///
/// let exporter = PngExporter::new();
/// assert_eq!(exporter.extension(), "png");
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
        encode_bitmap_to_png(bitmap_only(output, "PNG")?)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
