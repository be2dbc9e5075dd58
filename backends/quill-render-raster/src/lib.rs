//! Raster engine - pen strokes onto pixels via tiny-skia
//!
//! The cheap end of the [`PenEngine`] contract. Moving the pen is free,
//! every line is stroked straight into an in-memory pixmap, and
//! [`PenEngine::finalize`] hands the pixels back as an RGBA bitmap for an
//! exporter to encode.
//!
//! The canvas is `(0, height, width, 0)`: fitted drawings keep their
//! y-axis pointing up even though pixel rows count downwards.

use quill_core::{
    error::{RenderError, Result},
    traits::PenEngine,
    types::{BBox, BitmapData, Point, RenderOutput},
    Color, RenderParams,
};
use tiny_skia::{Paint, PathBuilder, Pixmap, Transform};

/// Largest side, in pixels, a raster canvas may have
pub const MAX_SIZE: u32 = 65535;

/// A tiny-skia pixmap that behaves like a pen
pub struct RasterEngine {
    pixmap: Pixmap,
    paint: Paint<'static>,
    stroke: tiny_skia::Stroke,
    position: Option<Point>,
    lines: usize,
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

impl RasterEngine {
    /// Creates a `width` x `height` canvas filled with the background color
    pub fn new(width: u32, height: u32, params: &RenderParams) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_SIZE || height > MAX_SIZE {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;
        pixmap.fill(skia_color(params.background));

        let mut paint = Paint::default();
        let fg = params.foreground;
        paint.set_color_rgba8(fg.r, fg.g, fg.b, fg.a);
        paint.anti_alias = params.antialias;

        let stroke = tiny_skia::Stroke {
            width: params.stroke_width,
            ..Default::default()
        };

        log::debug!(
            "Raster: {}x{} canvas, stroke width {}",
            width,
            height,
            params.stroke_width
        );

        Ok(Self {
            pixmap,
            paint,
            stroke,
            position: None,
            lines: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of lines stroked so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);

        // Zero-length or non-finite lines have no path and leave no mark
        let Some(path) = pb.finish() else {
            log::trace!("Raster: skipping empty line {:?} -> {:?}", from, to);
            return;
        };
        self.pixmap
            .stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        self.lines += 1;
    }

    /// Straight (non-premultiplied) RGBA copy of the pixmap
    fn to_bitmap(&self) -> BitmapData {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        BitmapData {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            data,
        }
    }
}

impl PenEngine for RasterEngine {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn canvas(&self) -> BBox {
        BBox::new(0.0, f64::from(self.height()), f64::from(self.width()), 0.0)
    }

    fn position(&self) -> Option<Point> {
        self.position
    }

    fn set_position(&mut self, p: Point) -> Result<()> {
        self.position = Some(p);
        Ok(())
    }

    fn draw_to(&mut self, p: Point) -> Result<()> {
        if let Some(from) = self.position {
            self.stroke_line(from, p);
        }
        self.position = Some(p);
        Ok(())
    }

    fn draw_segment(&mut self, from: Point, to: Point) -> Result<()> {
        self.stroke_line(from, to);
        self.position = Some(to);
        Ok(())
    }

    fn finalize(&mut self) -> Result<RenderOutput> {
        log::info!(
            "Raster: {} lines on {}x{}",
            self.lines,
            self.width(),
            self.height()
        );
        Ok(RenderOutput::Bitmap(self.to_bitmap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::QuillError;

    fn engine(width: u32, height: u32) -> RasterEngine {
        RasterEngine::new(width, height, &RenderParams::default()).unwrap()
    }

    fn bitmap(engine: &mut RasterEngine) -> BitmapData {
        match engine.finalize().unwrap() {
            RenderOutput::Bitmap(bitmap) => bitmap,
            other => panic!("expected a bitmap, got {other:?}"),
        }
    }

    fn pixel(bitmap: &BitmapData, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * bitmap.width + x) * 4) as usize;
        [
            bitmap.data[idx],
            bitmap.data[idx + 1],
            bitmap.data[idx + 2],
            bitmap.data[idx + 3],
        ]
    }

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_dimensions_are_validated() {
        for (w, h) in [(0, 10), (10, 0), (MAX_SIZE + 1, 10)] {
            let err = RasterEngine::new(w, h, &RenderParams::default())
                .err()
                .unwrap();
            assert!(matches!(
                err,
                QuillError::RenderingFailed(RenderError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_canvas_is_y_flipped() {
        let engine = engine(64, 32);
        assert_eq!(engine.canvas(), BBox::new(0.0, 32.0, 64.0, 0.0));
        assert_eq!(engine.name(), "raster");
    }

    #[test]
    fn test_fresh_canvas_is_background() {
        let mut engine = engine(4, 3);
        let bitmap = bitmap(&mut engine);
        assert_eq!(bitmap.data.len(), 4 * 3 * 4);
        assert!(bitmap.data.chunks_exact(4).all(|px| px == WHITE));
    }

    #[test]
    fn test_set_position_leaves_no_mark() {
        let mut engine = engine(10, 10);
        engine.set_position(Point::new(2.0, 2.0)).unwrap();
        engine.set_position(Point::new(8.0, 8.0)).unwrap();

        assert_eq!(engine.position(), Some(Point::new(8.0, 8.0)));
        assert_eq!(engine.lines(), 0);
        assert!(bitmap(&mut engine).data.chunks_exact(4).all(|px| px == WHITE));
    }

    #[test]
    fn test_segment_darkens_its_row() {
        let mut engine = engine(10, 10);
        engine
            .draw_segment(Point::new(0.0, 5.5), Point::new(10.0, 5.5))
            .unwrap();

        let bitmap = bitmap(&mut engine);
        assert_ne!(pixel(&bitmap, 5, 5), WHITE);
        assert_eq!(pixel(&bitmap, 5, 1), WHITE);
        assert_eq!(pixel(&bitmap, 5, 8), WHITE);
    }

    #[test]
    fn test_draw_to_without_position_only_moves() {
        let mut engine = engine(10, 10);
        engine.draw_to(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.position(), Some(Point::new(5.0, 5.0)));

        engine.draw_to(Point::new(5.0, 9.0)).unwrap();
        assert_eq!(engine.lines(), 1);
    }

    #[test]
    fn test_foreground_color_is_used_without_antialiasing() {
        let params = RenderParams {
            foreground: Color::rgba(200, 0, 0, 255),
            antialias: false,
            stroke_width: 2.0,
            ..Default::default()
        };
        let mut engine = RasterEngine::new(10, 10, &params).unwrap();
        engine
            .draw_segment(Point::new(5.0, 0.0), Point::new(5.0, 10.0))
            .unwrap();

        let bitmap = bitmap(&mut engine);
        assert_eq!(pixel(&bitmap, 5, 5), [200, 0, 0, 255]);
    }
}
