//! Ogham, drawn horizontally along its stem line
//!
//! A bar is one unit long. Glyphs sit on the stem at `y = 1`: the B
//! series hangs below it, the H series stands above, the M series crosses
//! it at a slant and the vowels cut right through. Beith is 0 wide and 1
//! tall, ailm is 0 wide and 2 tall.

use quill_core::{
    error::Result,
    font::{Font, Guide, Stroke, ValueMap},
};

use crate::{build_glyphs, GlyphTable};

/// Gap between two notches of the same glyph
pub const ILN: f64 = 0.2;

/// Gap between two glyphs
pub const IOG: f64 = 0.6;

/// Horizontal shift per unit of height for the M series, tan(15°)
pub const M_Y: f64 = 0.2679491924311227;

/// Height of the stem line in glyph coordinates
pub const STEM_Y: f64 = 1.0;

const fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Stroke {
    Stroke::segment(x0, y0, x1, y1)
}

const fn to(x: f64, y: f64) -> Stroke {
    Stroke::line_to(x, y)
}

const M: f64 = 2.0 * M_Y;

pub static GLYPHS: &GlyphTable = &[
    // Aicme Beithe
    ("beith", &[seg(0.0, 1.0, 0.0, 0.0)]),
    ("luis", &[seg(0.0, 1.0, 0.0, 0.0), seg(ILN, 1.0, ILN, 0.0)]),
    (
        "fearn",
        &[
            seg(0.0, 1.0, 0.0, 0.0),
            seg(ILN, 1.0, ILN, 0.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 0.0),
        ],
    ),
    (
        "saille",
        &[
            seg(0.0, 1.0, 0.0, 0.0),
            seg(ILN, 1.0, ILN, 0.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 0.0),
            seg(3.0 * ILN, 1.0, 3.0 * ILN, 0.0),
        ],
    ),
    (
        "nuin",
        &[
            seg(0.0, 1.0, 0.0, 0.0),
            seg(ILN, 1.0, ILN, 0.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 0.0),
            seg(3.0 * ILN, 1.0, 3.0 * ILN, 0.0),
            seg(4.0 * ILN, 1.0, 4.0 * ILN, 0.0),
        ],
    ),
    // Aicme hÚatha
    ("uath", &[seg(0.0, 1.0, 0.0, 2.0)]),
    ("duir", &[seg(0.0, 1.0, 0.0, 2.0), seg(ILN, 1.0, ILN, 2.0)]),
    (
        "tinne",
        &[
            seg(0.0, 1.0, 0.0, 2.0),
            seg(ILN, 1.0, ILN, 2.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 2.0),
        ],
    ),
    (
        "coll",
        &[
            seg(0.0, 1.0, 0.0, 2.0),
            seg(ILN, 1.0, ILN, 2.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 2.0),
            seg(3.0 * ILN, 1.0, 3.0 * ILN, 2.0),
        ],
    ),
    (
        "ceirt",
        &[
            seg(0.0, 1.0, 0.0, 2.0),
            seg(ILN, 1.0, ILN, 2.0),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 2.0),
            seg(3.0 * ILN, 1.0, 3.0 * ILN, 2.0),
            seg(4.0 * ILN, 1.0, 4.0 * ILN, 2.0),
        ],
    ),
    // Aicme Muine
    ("muin", &[seg(M, 2.0, 0.0, 0.0)]),
    ("gort", &[seg(M, 2.0, 0.0, 0.0), seg(M + ILN, 2.0, ILN, 0.0)]),
    (
        "ngeadal",
        &[
            seg(M, 2.0, 0.0, 0.0),
            seg(M + ILN, 2.0, ILN, 0.0),
            seg(M + 2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
        ],
    ),
    (
        "straif",
        &[
            seg(M, 2.0, 0.0, 0.0),
            seg(M + ILN, 2.0, ILN, 0.0),
            seg(M + 2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
            seg(M + 3.0 * ILN, 2.0, 3.0 * ILN, 0.0),
        ],
    ),
    (
        "ruis",
        &[
            seg(M, 2.0, 0.0, 0.0),
            seg(M + ILN, 2.0, ILN, 0.0),
            seg(M + 2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
            seg(M + 3.0 * ILN, 2.0, 3.0 * ILN, 0.0),
            seg(M + 4.0 * ILN, 2.0, 4.0 * ILN, 0.0),
        ],
    ),
    // Aicme Ailme
    ("ailm", &[seg(0.0, 2.0, 0.0, 0.0)]),
    ("onn", &[seg(0.0, 2.0, 0.0, 0.0), seg(ILN, 2.0, ILN, 0.0)]),
    (
        "ur",
        &[
            seg(0.0, 2.0, 0.0, 0.0),
            seg(ILN, 2.0, ILN, 0.0),
            seg(2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
        ],
    ),
    (
        "edad",
        &[
            seg(0.0, 2.0, 0.0, 0.0),
            seg(ILN, 2.0, ILN, 0.0),
            seg(2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
            seg(3.0 * ILN, 2.0, 3.0 * ILN, 0.0),
        ],
    ),
    (
        "idad",
        &[
            seg(0.0, 2.0, 0.0, 0.0),
            seg(ILN, 2.0, ILN, 0.0),
            seg(2.0 * ILN, 2.0, 2.0 * ILN, 0.0),
            seg(3.0 * ILN, 2.0, 3.0 * ILN, 0.0),
            seg(4.0 * ILN, 2.0, 4.0 * ILN, 0.0),
        ],
    ),
    // Forfeda
    ("ebad", &[seg(0.0, 2.0, 3.0 * ILN, 0.0), seg(3.0 * ILN, 0.0, 0.0, 0.0)]),
    (
        "or",
        &[
            seg(1.5 * ILN, 2.0, 3.0 * ILN, 1.0),
            to(1.5 * ILN, 0.0),
            to(0.0, 1.0),
            to(1.5 * ILN, 0.0),
        ],
    ),
    (
        "uillean",
        &[
            seg(0.0, 1.0, 0.0, 0.5),
            to(4.0 * ILN, 0.5),
            to(4.0 * ILN, 0.75),
            to(ILN, 0.75),
        ],
    ),
    (
        "pin",
        &[
            seg(0.0, 1.0, 2.0 * ILN, 0.0),
            seg(ILN, 1.0, 3.0 * ILN, 0.0),
            seg(3.0 * ILN, 1.0, 0.0, 0.0),
            seg(4.0 * ILN, 1.0, ILN, 0.0),
        ],
    ),
    (
        "emancholl",
        &[
            seg(ILN, 1.0, ILN, 1.0 + 4.0 * ILN),
            seg(2.0 * ILN, 1.0, 2.0 * ILN, 1.0 + 4.0 * ILN),
            seg(3.0 * ILN, 1.0, 3.0 * ILN, 1.0 + 4.0 * ILN),
            seg(0.0, 1.0 + ILN, 4.0 * ILN, 1.0 + ILN),
            seg(0.0, 1.0 + 2.0 * ILN, 4.0 * ILN, 1.0 + 2.0 * ILN),
            seg(0.0, 1.0 + 3.0 * ILN, 4.0 * ILN, 1.0 + 3.0 * ILN),
        ],
    ),
    ("peith", &[seg(0.0, 0.5, 2.0 * ILN, 0.5)]),
];

/// Latin letters and digraphs to Ogham, both cases
pub static DEFAULT_MAP: &ValueMap<'static> = &[
    (&["a", "A"], "ailm"),
    (&["b", "B"], "beith"),
    (&["c", "C", "k", "K"], "coll"),
    (&["d", "D"], "duir"),
    (&["e", "E"], "edad"),
    (&["f", "F"], "fearn"),
    (&["g", "G"], "gort"),
    (&["h", "H"], "uath"),
    (&["i", "I"], "idad"),
    (&["l", "L"], "luis"),
    (&["m", "M"], "muin"),
    (&["o", "O"], "onn"),
    (&["p", "P"], "peith"),
    (&["q", "Q"], "ceirt"),
    (&["n", "N"], "nuin"),
    (&["r", "R"], "ruis"),
    (&["s", "S"], "saille"),
    (&["t", "T"], "tinne"),
    (&["u", "U"], "ur"),
    (&["z", "Z"], "straif"),
    (&["ng", "NG"], "ngeadal"),
    (&["EA", "EO", "ea", "eo"], "ebad"),
    (&["OI", "OE", "oi", "oe"], "or"),
    (&["UI", "UA", "ui", "ua"], "uillean"),
    (&["IO", "IA", "io", "ia"], "pin"),
    (&["X", "CH", "AE", "x", "ch", "ae"], "emancholl"),
];

/// The Ogham font with its default value map and stem line
pub fn font() -> Result<Font> {
    let mut font = Font::new("ogham", IOG, build_glyphs(GLYPHS))
        .with_guide(Guide::Stemline { y: STEM_Y });
    font.set_value_map(DEFAULT_MAP)?;
    Ok(font)
}
