//! Lining glyphs up and replaying their strokes through an engine
//!
//! Glyphs sit side by side on a shared baseline, separated by the font's
//! spacing. The whole run gets a margin, is fitted onto the canvas, and
//! every stroke goes out through the [`PenEngine`] in table order.

use crate::{
    error::{ConfigError, Result},
    fit::Fit,
    font::{Font, Glyph, Guide, Stroke},
    traits::PenEngine,
    types::{BBox, Point, RenderOutput},
};

/// Bounding box of a run of glyphs, origin at `(0, 0)`.
///
/// Width is every glyph width plus one `spacing` between neighbours; height
/// is the tallest glyph. Both are then grown by `1 + margin`.
pub fn layout(glyphs: &[&Glyph], spacing: f64, margin: f64) -> BBox {
    let gaps = glyphs.len().saturating_sub(1) as f64;
    let width: f64 = glyphs.iter().map(|g| g.width()).sum::<f64>() + spacing * gaps;
    let height = glyphs.iter().map(|g| g.height()).fold(0.0, f64::max);
    BBox::new(0.0, 0.0, width * (1.0 + margin), height * (1.0 + margin))
}

/// Draw `glyphs` onto `canvas` and finalize the engine.
///
/// The run is laid out, fitted to the canvas, decorated with the font's
/// guide if it has one, and replayed glyph by glyph.
pub fn render(
    glyphs: &[&Glyph],
    font: &Font,
    canvas: BBox,
    engine: &mut dyn PenEngine,
    margin: f64,
) -> Result<RenderOutput> {
    if glyphs.is_empty() {
        return Err(ConfigError::NothingToDraw.into());
    }

    let bounds = layout(glyphs, font.spacing(), margin);
    let fit = Fit::new(bounds, canvas)?;
    let x_start = bounds.width() * margin / 2.0;
    let y_start = bounds.height() * margin / 2.0;

    log::debug!(
        "Rendering {} glyphs of {} on {} ({:.3}x{:.3})",
        glyphs.len(),
        font.name(),
        engine.name(),
        bounds.width(),
        bounds.height()
    );

    if let Guide::Stemline { y } = font.guide() {
        let x_end = bounds.width() * (1.0 - margin / 2.0);
        engine.draw_segment(
            fit.apply(Point::new(x_start, y_start + y)),
            fit.apply(Point::new(x_end, y_start + y)),
        )?;
    }

    let mut cursor = x_start;
    for glyph in glyphs {
        trace_strokes(glyph.strokes(), (cursor, y_start), &fit, engine)?;
        cursor += font.spacing() + glyph.width();
    }

    engine.finalize()
}

/// Replay strokes shifted by `offset` and projected through `fit`
pub fn trace_strokes(
    strokes: &[Stroke],
    offset: (f64, f64),
    fit: &Fit,
    engine: &mut dyn PenEngine,
) -> Result<()> {
    let place = |p: Point| fit.apply(p.offset(offset.0, offset.1));
    for stroke in strokes {
        match *stroke {
            Stroke::Move(p) => engine.set_position(place(p))?,
            Stroke::LineTo(p) => engine.draw_to(place(p))?,
            Stroke::Segment(from, to) => engine.draw_segment(place(from), place(to))?,
        }
    }
    Ok(())
}

/// Trace `points` as one closed line fitted onto `canvas`, then finalize.
///
/// The pen lands on the first point, visits every following one and comes
/// back to the start.
pub fn trace_points(
    points: &[Point],
    canvas: BBox,
    engine: &mut dyn PenEngine,
) -> Result<RenderOutput> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(ConfigError::NonFiniteCoordinate.into());
    }
    let bounds = BBox::from_points(points).ok_or(ConfigError::EmptyCurve)?;
    let fit = Fit::new(bounds, canvas)?;

    log::debug!("Tracing {} points on {}", points.len(), engine.name());

    let start = fit.apply(points[0]);
    engine.set_position(start)?;
    for p in &points[1..] {
        engine.draw_to(fit.apply(*p))?;
    }
    engine.draw_to(start)?;

    engine.finalize()
}
