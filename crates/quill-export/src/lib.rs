//! Export module for Quill
//!
//! Turns the RGBA bitmap a raster engine produces into file bytes. Plotter
//! sessions leave nothing on disk, so their output is refused here.

use std::io::Write;
use std::path::Path;

use quill_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, RenderOutput},
};

pub mod png;

pub use png::PngExporter;

/// File formats Quill can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Ppm,
    Pgm,
}

impl ExportFormat {
    /// Guess the format from a path's extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ExportFormat::Png),
            "ppm" => Some(ExportFormat::Ppm),
            "pgm" => Some(ExportFormat::Pgm),
            _ => None,
        }
    }

    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Png => Box::new(PngExporter::new()),
            ExportFormat::Ppm => Box::new(PnmExporter::ppm()),
            ExportFormat::Pgm => Box::new(PnmExporter::pgm()),
        }
    }
}

/// The bitmap's pixels, or an error if the buffer is shorter than its size says
pub(crate) fn rgba_pixels(bitmap: &BitmapData) -> Result<&[u8]> {
    let expected = bitmap.width as usize * bitmap.height as usize * 4;
    if bitmap.data.len() < expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small: expected {} bytes for {}x{} RGBA, got {}",
            expected,
            bitmap.width,
            bitmap.height,
            bitmap.data.len()
        ))
        .into());
    }
    Ok(&bitmap.data[..expected])
}

pub(crate) fn bitmap_only<'a>(output: &'a RenderOutput, exporter: &str) -> Result<&'a BitmapData> {
    match output {
        RenderOutput::Bitmap(bitmap) => Ok(bitmap),
        RenderOutput::Plotted(_) => Err(ExportError::FormatNotSupported(format!(
            "{exporter} exporter only supports bitmap output"
        ))
        .into()),
    }
}

/// PNM (Portable Any Map) exporter, ASCII flavour
pub struct PnmExporter {
    format: PnmFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum PnmFormat {
    /// PGM - Portable Graymap
    Pgm,
    /// PPM - Portable Pixmap (color)
    Ppm,
}

impl PnmExporter {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    /// Create a PPM (color) exporter
    pub fn ppm() -> Self {
        Self::new(PnmFormat::Ppm)
    }

    /// Create a PGM (grayscale) exporter
    pub fn pgm() -> Self {
        Self::new(PnmFormat::Pgm)
    }

    fn export_bitmap(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        let pixels = rgba_pixels(bitmap)?;
        let mut output = Vec::new();

        let magic = match self.format {
            PnmFormat::Ppm => "P3",
            PnmFormat::Pgm => "P2",
        };
        writeln!(&mut output, "{magic}")?;
        writeln!(&mut output, "{} {}", bitmap.width, bitmap.height)?;
        writeln!(&mut output, "255")?;

        // Alpha is dropped; rows end with a newline
        for row in pixels.chunks_exact(bitmap.width as usize * 4) {
            for px in row.chunks_exact(4) {
                match self.format {
                    PnmFormat::Ppm => write!(&mut output, "{} {} {} ", px[0], px[1], px[2])?,
                    PnmFormat::Pgm => write!(&mut output, "{} ", luminance(px[0], px[1], px[2]))?,
                }
            }
            writeln!(&mut output)?;
        }

        log::debug!(
            "{} export: {}x{}, {} bytes",
            self.name(),
            bitmap.width,
            bitmap.height,
            output.len()
        );
        Ok(output)
    }
}

/// ITU-R 601 luma, in integer arithmetic
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    ((r * 299 + g * 587 + b * 114) / 1000) as u8
}

impl Exporter for PnmExporter {
    fn name(&self) -> &'static str {
        self.extension()
    }

    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
        let bitmap = bitmap_only(output, "PNM")?;
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(ExportError::EncodingFailed("Empty bitmap".into()).into());
        }
        self.export_bitmap(bitmap)
    }

    fn extension(&self) -> &'static str {
        match self.format {
            PnmFormat::Pgm => "pgm",
            PnmFormat::Ppm => "ppm",
        }
    }

    fn mime_type(&self) -> &'static str {
        match self.format {
            PnmFormat::Pgm => "image/x-portable-graymap",
            PnmFormat::Ppm => "image/x-portable-pixmap",
        }
    }
}

impl Default for PnmExporter {
    fn default() -> Self {
        Self::ppm()
    }
}
