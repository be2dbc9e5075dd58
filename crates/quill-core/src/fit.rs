//! Projecting one box onto another without distorting what's inside
//!
//! Curves come out of their formulas in whatever units the math produces,
//! glyphs are drawn in a unit-ish box of their own. Engines want device
//! pixels or plotter steps. [`Fit`] bridges the two: the largest uniform
//! scale that keeps the source inside the destination, centered along the
//! slack axis.
//!
//! Axis flips are carried by the corner order of the boxes. A raster canvas
//! given as `(0, h, w, 0)` has its y-axis pointing down, and the sign of the
//! y scale follows without any separate flag.

use crate::{
    error::{ConfigError, Result},
    types::{BBox, Point},
};

/// A scale + translate transform bound to one pair of boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    origin: Point,
    scale_x: f64,
    scale_y: f64,
    translate: Point,
}

impl Fit {
    /// Build the transform mapping `from` into `to`.
    ///
    /// Both boxes need finite, non-zero width and height. A single-point
    /// curve or a glyph run with no extent fails here, before anything is
    /// drawn.
    pub fn new(from: BBox, to: BBox) -> Result<Self> {
        check_box(&from)?;
        check_box(&to)?;

        let (w_from, h_from) = (from.width(), from.height());
        let (w_to, h_to) = (to.width(), to.height());
        let a_from = (w_from / h_from).abs();
        let a_to = (w_to / h_to).abs();

        let (scale_x, scale_y, translate) = if a_from > a_to {
            // Source is relatively wider: width fills, height is centered
            let scale_x = w_to / w_from;
            let scale_y = scale_x.copysign(h_to * h_from);
            let ty = to.y0 + (h_to - h_from * scale_y) / 2.0;
            (scale_x, scale_y, Point::new(to.x0, ty))
        } else {
            let scale_y = h_to / h_from;
            let scale_x = scale_y.copysign(w_to * w_from);
            let tx = to.x0 + (w_to - w_from * scale_x) / 2.0;
            (scale_x, scale_y, Point::new(tx, to.y0))
        };

        log::trace!(
            "fit {:?} -> {:?}: scale ({}, {}), translate {:?}",
            from,
            to,
            scale_x,
            scale_y,
            translate
        );

        Ok(Self {
            origin: Point::new(from.x0, from.y0),
            scale_x,
            scale_y,
            translate,
        })
    }

    /// Project a point from the source box into the destination box
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.translate.x + self.scale_x * (p.x - self.origin.x),
            self.translate.y + self.scale_y * (p.y - self.origin.y),
        )
    }

    /// Signed scale factors `(x, y)`; their magnitudes are always equal
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }
}

fn check_box(b: &BBox) -> Result<()> {
    if b.is_degenerate() {
        return Err(ConfigError::DegenerateBox {
            width: b.width(),
            height: b.height(),
        }
        .into());
    }
    Ok(())
}
