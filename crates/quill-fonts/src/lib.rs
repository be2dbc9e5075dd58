//! The stroke fonts Quill ships with
//!
//! Two scripts, both made only of straight lines:
//!
//! - [`ogham`] - The Irish notch alphabet, written along a stem line
//! - [`cirth`] - The runes of Daeron, with four historical value maps
//!
//! Glyph geometry lives in `static` tables and is turned into a
//! [`Font`] on demand. Nothing here is global: every call builds a fresh
//! font that the caller owns and may rebind.
//!
//! ```
//! use quill_fonts::{load, CirthMode};
//!
//! let font = load("cirth", CirthMode::AngerthasMoria)?;
//! assert_eq!(font.glyph_by_value("s").map(|g| g.name()), Some("54"));
//! # Ok::<(), quill_core::QuillError>(())
//! ```

// this_file: crates/quill-fonts/src/lib.rs

use quill_core::{
    error::{ConfigError, Result},
    font::{Font, Glyph, Stroke},
};

pub mod cirth;
pub mod ogham;

pub use cirth::CirthMode;

/// Names accepted by [`load`]
pub const FONT_NAMES: &[&str] = &["ogham", "cirth"];

/// Glyph geometry as written in the tables: a name and its strokes
pub type GlyphTable = [(&'static str, &'static [Stroke])];

pub(crate) fn build_glyphs(table: &GlyphTable) -> Vec<Glyph> {
    table
        .iter()
        .map(|(name, strokes)| Glyph::new(*name, strokes.to_vec()))
        .collect()
}

/// Build a shipped font by name.
///
/// `cirth_mode` picks the value map when `name` is `"cirth"` and is
/// ignored otherwise. Names are matched case-insensitively.
pub fn load(name: &str, cirth_mode: CirthMode) -> Result<Font> {
    let font = match name.to_ascii_lowercase().as_str() {
        "ogham" => ogham::font()?,
        "cirth" => cirth::font(cirth_mode)?,
        _ => return Err(ConfigError::UnknownFont(name.to_string()).into()),
    };
    log::debug!(
        "Loaded font {} ({} glyphs)",
        font.name(),
        font.glyphs().len()
    );
    Ok(font)
}
