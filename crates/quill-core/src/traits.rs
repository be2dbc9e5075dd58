//! The contracts that bind every backend together
//!
//! - [`PenEngine`] - Where strokes become marks
//! - [`Curve`] - Where parameters become points
//! - [`Exporter`] - Where bitmaps become files

use crate::{
    error::Result,
    types::{BBox, Point, RenderOutput},
};

/// Anything that can hold a pen
///
/// Two very different things sit behind this trait: an in-memory raster
/// canvas where a line costs nothing, and a physical arm where every motion
/// takes time and a careless move leaves ink on the paper. Callers use the
/// same four operations for both.
///
/// ```ignore
/// engine.set_position(start)?;
/// engine.draw_to(next)?;
/// engine.draw_segment(a, b)?;
/// let output = engine.finalize()?;
/// ```
pub trait PenEngine {
    /// Used in logs and error messages
    fn name(&self) -> &'static str;

    /// The destination box drawings should be fitted into
    fn canvas(&self) -> BBox;

    /// Where the pen currently rests, if anywhere yet
    fn position(&self) -> Option<Point>;

    /// Move the pen to `p` without leaving a mark
    fn set_position(&mut self, p: Point) -> Result<()>;

    /// Draw from the current position to `p`
    ///
    /// With no current position there is nothing to draw from, and the
    /// call only places the pen.
    fn draw_to(&mut self, p: Point) -> Result<()>;

    /// Draw from `from` to `to`, wherever the pen was before
    fn draw_segment(&mut self, from: Point, to: Point) -> Result<()>;

    /// End the session and hand back what was produced
    ///
    /// Call exactly once.
    fn finalize(&mut self) -> Result<RenderOutput>;
}

/// A parametric figure sampled into points
pub trait Curve {
    fn name(&self) -> &'static str;

    /// `steps` evenly spaced samples over one full period, end point excluded
    fn compute(&self, steps: usize) -> Vec<Point>;
}

/// The final step: pixels become files
pub trait Exporter {
    fn name(&self) -> &'static str;

    /// Encode the rendered output as bytes
    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
