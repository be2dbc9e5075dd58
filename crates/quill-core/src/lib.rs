//! Quill Core: from text or curves to pen strokes
//!
//! Everything Quill draws is a sequence of straight pen strokes. This crate
//! holds the pieces every drawing shares, whatever produced the points and
//! whatever ends up holding the pen.
//!
//! ## The Pipeline
//!
//! Text takes the long road:
//!
//! 1. **Tokenizing** - Raw text becomes font keys, longest match first
//! 2. **Layout** - Glyphs line up and the run gets a bounding box
//! 3. **Fitting** - The box is projected onto the engine's canvas
//! 4. **Replay** - Every stroke goes through a [`PenEngine`]
//!
//! Curves skip the first two steps: their points are fitted and traced
//! as one continuous line.
//!
//! ## Draw Your First Glyph
//!
//! ```rust,no_run
//! use quill_core::{font::{Font, Glyph, Stroke}, types::Point, Pipeline};
//! # use quill_core::{traits::PenEngine, types::{BBox, RenderOutput, PlotSummary}};
//! # struct MyEngine;
//! # impl PenEngine for MyEngine {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn canvas(&self) -> BBox { BBox::new(0.0, 100.0, 100.0, 0.0) }
//! #     fn position(&self) -> Option<Point> { None }
//! #     fn set_position(&mut self, _: Point) -> quill_core::Result<()> { Ok(()) }
//! #     fn draw_to(&mut self, _: Point) -> quill_core::Result<()> { Ok(()) }
//! #     fn draw_segment(&mut self, _: Point, _: Point) -> quill_core::Result<()> { Ok(()) }
//! #     fn finalize(&mut self) -> quill_core::Result<RenderOutput> {
//! #         Ok(RenderOutput::Plotted(PlotSummary::default()))
//! #     }
//! # }
//!
//! let mut font = Font::new(
//!     "boxes",
//!     0.1,
//!     vec![Glyph::new(
//!         "square",
//!         vec![
//!             Stroke::Segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
//!             Stroke::LineTo(Point::new(1.0, 1.0)),
//!             Stroke::LineTo(Point::new(0.0, 1.0)),
//!             Stroke::LineTo(Point::new(0.0, 0.0)),
//!         ],
//!     )],
//! );
//! font.set_value_map(&[(&["o", "O"], "square")])?;
//!
//! let mut pipeline = Pipeline::builder().engine(Box::new(MyEngine)).build()?;
//! let outcome = pipeline.write("oOo", &font)?;
//! assert_eq!(outcome.glyphs, 3);
//! # Ok::<(), quill_core::QuillError>(())
//! ```
//!
//! ## The Traits That Power Everything
//!
//! - [`PenEngine`] - Where strokes become marks, on pixels or on paper
//! - [`Curve`] - Where parameters become point sequences
//! - [`Exporter`] - Where bitmaps become files

pub mod error;
pub mod fit;
pub mod font;
pub mod layout;
pub mod pipeline;
pub mod tokenize;
pub mod traits;

pub use error::{ConfigError, QuillError, Result};
pub use fit::Fit;
pub use pipeline::{Pipeline, PipelineBuilder, WriteOutcome};
pub use traits::{Curve, Exporter, PenEngine};

/// The data structures that travel between stages
pub mod types {
    /// A position on the plane, in whatever units the current stage uses
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }

    impl Point {
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        /// Shift by `(dx, dy)`
        pub fn offset(self, dx: f64, dy: f64) -> Self {
            Self::new(self.x + dx, self.y + dy)
        }

        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl From<(f64, f64)> for Point {
        fn from((x, y): (f64, f64)) -> Self {
            Self::new(x, y)
        }
    }

    /// A rectangle given by two corners
    ///
    /// The corners are not normalized: a box with `y0 > y1` describes a
    /// y-axis pointing the other way, and the fitter honours that.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct BBox {
        pub x0: f64,
        pub y0: f64,
        pub x1: f64,
        pub y1: f64,
    }

    impl BBox {
        pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
            Self { x0, y0, x1, y1 }
        }

        /// Signed width, `x1 - x0`
        pub fn width(&self) -> f64 {
            self.x1 - self.x0
        }

        /// Signed height, `y1 - y0`
        pub fn height(&self) -> f64 {
            self.y1 - self.y0
        }

        /// Smallest box holding every point, corners ordered min to max.
        ///
        /// Returns `None` for an empty slice.
        pub fn from_points(points: &[Point]) -> Option<Self> {
            let first = points.first()?;
            let init = Self::new(first.x, first.y, first.x, first.y);
            Some(points[1..].iter().fold(init, |b, p| Self {
                x0: b.x0.min(p.x),
                y0: b.y0.min(p.y),
                x1: b.x1.max(p.x),
                y1: b.y1.max(p.y),
            }))
        }

        /// True when either side has zero or non-finite length
        pub fn is_degenerate(&self) -> bool {
            let (w, h) = (self.width(), self.height());
            !(w.is_finite() && h.is_finite()) || w == 0.0 || h == 0.0
        }

        /// Inclusive containment check, whatever the corner order
        pub fn contains(&self, p: Point, tolerance: f64) -> bool {
            let (xmin, xmax) = (self.x0.min(self.x1), self.x0.max(self.x1));
            let (ymin, ymax) = (self.y0.min(self.y1), self.y0.max(self.y1));
            p.x >= xmin - tolerance
                && p.x <= xmax + tolerance
                && p.y >= ymin - tolerance
                && p.y <= ymax + tolerance
        }
    }

    /// What an engine hands back when the session is over
    #[derive(Debug, Clone)]
    pub enum RenderOutput {
        Bitmap(BitmapData),
        Plotted(PlotSummary),
    }

    /// Raw RGBA8 pixels, row-major, `width * height * 4` bytes
    #[derive(Debug, Clone)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    /// Device commands issued during a plotting session
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PlotSummary {
        pub moves: usize,
        pub raises: usize,
        pub lowers: usize,
    }
}

/// How a drawing should look
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Fraction of the text run added around it, split evenly on each side
    pub margin: f64,
    pub foreground: Color,
    pub background: Color,
    /// Line width in canvas units (raster only)
    pub stroke_width: f32,
    pub antialias: bool,
}

impl RenderParams {
    /// Reject settings that would make every later stage misbehave
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() || !(0.0..1.0).contains(&self.margin) {
            return Err(ConfigError::InvalidParameter {
                name: "margin",
                reason: format!("{} is outside [0, 1)", self.margin),
            }
            .into());
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "stroke_width",
                reason: format!("{} must be positive", self.stroke_width),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            margin: 0.05,
            foreground: Color::black(),
            background: Color::white(),
            stroke_width: 1.0,
            antialias: true,
        }
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::types::{BBox, Point};
    use super::*;

    #[test]
    fn bbox_from_points_orders_corners() {
        let b = BBox::from_points(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(b, BBox::new(-2.0, -1.0, 3.0, 4.0));
    }

    #[test]
    fn bbox_from_no_points() {
        assert!(BBox::from_points(&[]).is_none());
    }

    #[test]
    fn single_point_box_is_degenerate() {
        let b = BBox::from_points(&[Point::new(1.0, 1.0)]).unwrap();
        assert!(b.is_degenerate());
    }

    #[test]
    fn inverted_box_contains() {
        let b = BBox::new(0.0, 100.0, 100.0, 0.0);
        assert!(b.contains(Point::new(50.0, 75.0), 0.0));
        assert!(!b.contains(Point::new(50.0, 101.0), 0.0));
    }

    #[test]
    fn default_params_are_valid() {
        assert!(RenderParams::default().validate().is_ok());
    }

    #[test]
    fn margin_of_one_is_rejected() {
        let params = RenderParams {
            margin: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(QuillError::Config(ConfigError::InvalidParameter { name: "margin", .. }))
        ));
    }
}
