//! Glyphs made of strokes, and fonts that map text onto them
//!
//! A [`Font`] keeps two indexes. Glyph names are fixed when the font is
//! built. Text values ("a", "ng", "KHW", ...) go through a second map that
//! can be swapped at runtime, so one glyph set can serve several
//! transliteration schemes.

use std::collections::HashMap;

use crate::{
    error::{ConfigError, Result},
    types::Point,
};

/// One pen instruction inside a glyph, in glyph-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Reposition without leaving a mark
    Move(Point),
    /// Continue the line from the previous endpoint
    LineTo(Point),
    /// A standalone line between two points
    Segment(Point, Point),
}

impl Stroke {
    /// `Stroke::Segment` from raw coordinates, usable in `static` tables
    pub const fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::Segment(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// `Stroke::LineTo` from raw coordinates, usable in `static` tables
    pub const fn line_to(x: f64, y: f64) -> Self {
        Self::LineTo(Point::new(x, y))
    }

    /// `Stroke::Move` from raw coordinates, usable in `static` tables
    pub const fn move_to(x: f64, y: f64) -> Self {
        Self::Move(Point::new(x, y))
    }

    fn endpoints(&self) -> impl Iterator<Item = Point> {
        let (first, second) = match *self {
            Stroke::Move(p) | Stroke::LineTo(p) => (p, None),
            Stroke::Segment(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// A named, drawable character
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    name: String,
    strokes: Vec<Stroke>,
    width: f64,
    height: f64,
}

impl Glyph {
    /// Build a glyph; width and height come from the stroke endpoints.
    pub fn new(name: impl Into<String>, strokes: Vec<Stroke>) -> Self {
        let (width, height) = extent(&strokes);
        Self {
            name: name.into(),
            strokes,
            width,
            height,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strokes in replay order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

fn extent(strokes: &[Stroke]) -> (f64, f64) {
    let mut points = strokes.iter().flat_map(Stroke::endpoints);
    let Some(first) = points.next() else {
        return (0.0, 0.0);
    };
    let (mut xmin, mut xmax, mut ymin, mut ymax) = (first.x, first.x, first.y, first.y);
    for p in points {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }
    (xmax - xmin, ymax - ymin)
}

/// Decoration a font draws once, before any of its glyphs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Guide {
    #[default]
    None,
    /// A horizontal line across the whole run at glyph-local height `y`
    Stemline { y: f64 },
}

/// A value map as written in font tables: every key in a tuple maps to the
/// glyph named on the right
pub type ValueMap<'a> = [(&'a [&'a str], &'a str)];

/// A glyph set plus the text values currently bound to it
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    spacing: f64,
    guide: Guide,
    glyphs: Vec<Glyph>,
    by_name: HashMap<String, usize>,
    by_value: HashMap<String, usize>,
}

impl Font {
    /// Index the glyphs by name; the value map starts out empty.
    pub fn new(name: impl Into<String>, spacing: f64, glyphs: Vec<Glyph>) -> Self {
        let by_name = glyphs
            .iter()
            .enumerate()
            .map(|(idx, glyph)| (glyph.name.clone(), idx))
            .collect();
        Self {
            name: name.into(),
            spacing,
            guide: Guide::None,
            glyphs,
            by_name,
            by_value: HashMap::new(),
        }
    }

    /// Attach a decoration drawn before the glyphs
    pub fn with_guide(mut self, guide: Guide) -> Self {
        self.guide = guide;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gap left between two consecutive glyphs
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn guide(&self) -> Guide {
        self.guide
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyph_by_name(&self, name: &str) -> Option<&Glyph> {
        self.by_name.get(name).map(|&idx| &self.glyphs[idx])
    }

    /// Look a text value up through the currently bound value map
    pub fn glyph_by_value(&self, value: &str) -> Option<&Glyph> {
        self.by_value.get(value).map(|&idx| &self.glyphs[idx])
    }

    pub fn is_value_mapped(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Every value currently bound, in no particular order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.by_value.keys().map(String::as_str)
    }

    /// Replace the whole value map.
    ///
    /// When a key shows up in several entries, the last one wins. If any
    /// entry names a glyph this font doesn't have, nothing changes.
    pub fn set_value_map(&mut self, map: &ValueMap<'_>) -> Result<()> {
        let mut by_value = HashMap::new();
        for (values, glyph_name) in map {
            let idx = *self
                .by_name
                .get(*glyph_name)
                .ok_or_else(|| ConfigError::UnknownGlyph((*glyph_name).to_string()))?;
            for value in values.iter() {
                by_value.insert((*value).to_string(), idx);
            }
        }
        log::debug!(
            "Font {}: bound {} values to {} glyphs",
            self.name,
            by_value.len(),
            self.glyphs.len()
        );
        self.by_value = by_value;
        Ok(())
    }
}
