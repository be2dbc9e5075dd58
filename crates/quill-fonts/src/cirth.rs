//! Cirth, the runes of Daeron
//!
//! Glyphs are named after their number in the classic table ("1" to
//! "58", plus the variant "38-2"). Each stands on a unit-high stem and is
//! at most 0.75 wide.
//!
//! Which sound a certh stands for changed a lot over time, so the value
//! map is picked by [`CirthMode`] and can be swapped on a built font with
//! [`set_mode`].

use std::fmt;
use std::str::FromStr;

use quill_core::{
    error::{ConfigError, QuillError, Result},
    font::{Font, Stroke, ValueMap},
};

use crate::{build_glyphs, GlyphTable};

/// Gap between two cirth
pub const GLYPH_SPACING: f64 = 0.1;

const fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Stroke {
    Stroke::segment(x0, y0, x1, y1)
}

const fn to(x: f64, y: f64) -> Stroke {
    Stroke::line_to(x, y)
}

pub static GLYPHS: &GlyphTable = &[
    ("1", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), to(0.0, 0.5)]),
    ("2", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), to(0.0, 0.5), to(0.5, 0.0)]),
    ("3", &[seg(0.5, 0.0, 0.5, 1.0), to(0.0, 0.75), to(0.5, 0.5)]),
    ("4", &[seg(0.5, 0.0, 0.5, 1.0), to(0.0, 0.75), to(0.5, 0.5), to(0.0, 0.0)]),
    (
        "5",
        &[
            seg(0.375, 0.0, 0.375, 1.0),
            to(0.0, 0.75),
            to(0.375, 0.5),
            to(0.75, 0.75),
            to(0.375, 1.0),
        ],
    ),
    (
        "6",
        &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), to(0.0, 0.5), to(0.5, 0.25), to(0.0, 0.0)],
    ),
    (
        "7",
        &[seg(0.5, 0.0, 0.5, 1.0), to(0.0, 0.75), to(0.5, 0.5), to(0.0, 0.25), to(0.5, 0.0)],
    ),
    ("8", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75)]),
    ("9", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), seg(0.0, 0.75, 0.5, 0.5)]),
    ("10", &[seg(0.5, 0.0, 0.5, 1.0), to(0.0, 0.75)]),
    ("11", &[seg(0.5, 0.0, 0.5, 1.0), to(0.0, 0.75), seg(0.5, 0.75, 0.0, 0.5)]),
    ("12", &[seg(0.375, 0.0, 0.375, 1.0), to(0.0, 0.75), seg(0.375, 1.0, 0.75, 0.75)]),
    ("13", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 0.5)]),
    ("14", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 0.5), seg(0.0, 0.25, 0.5, 0.0)]),
    ("15", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 0.0)]),
    ("16", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 0.0), seg(0.5, 0.25, 0.25, 0.0)]),
    (
        "17",
        &[seg(0.375, 0.0, 0.375, 1.0), seg(0.375, 0.5, 0.0, 0.0), seg(0.375, 0.5, 0.75, 0.0)],
    ),
    ("18", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 1.0)]),
    ("19", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 1.0), seg(0.0, 0.75, 0.25, 1.0)]),
    ("20", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 1.0)]),
    ("21", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 1.0), seg(0.5, 0.75, 0.25, 1.0)]),
    (
        "22",
        &[seg(0.375, 0.0, 0.375, 1.0), seg(0.375, 0.5, 0.0, 1.0), seg(0.375, 0.5, 0.75, 1.0)],
    ),
    ("23", &[seg(0.0, 0.0, 0.0, 1.0), to(0.375, 0.75), to(0.75, 1.0)]),
    (
        "24",
        &[
            seg(0.0, 0.0, 0.0, 1.0),
            to(0.375, 0.75),
            to(0.75, 1.0),
            seg(0.0, 0.75, 0.375, 0.5),
            to(0.75, 0.75),
        ],
    ),
    ("25", &[seg(0.75, 0.0, 0.75, 1.0), to(0.375, 0.75), to(0.0, 1.0)]),
    (
        "26",
        &[
            seg(0.75, 0.0, 0.75, 1.0),
            to(0.375, 0.75),
            to(0.0, 1.0),
            seg(0.75, 0.75, 0.375, 0.5),
            to(0.0, 0.75),
        ],
    ),
    (
        "27",
        &[
            seg(0.375, 0.0, 0.375, 1.0),
            to(0.375 / 2.0, 0.75),
            to(0.0, 1.0),
            seg(0.375, 1.0, 0.375 * 1.5, 0.75),
            to(0.75, 1.0),
        ],
    ),
    (
        "28",
        &[
            seg(0.0, 0.0, 0.0, 1.0),
            to(0.375, 0.75),
            to(0.75, 1.0),
            seg(0.0, 0.0, 0.375, 0.25),
            to(0.75, 0.0),
        ],
    ),
    ("29", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 1.0), seg(0.0, 0.5, 0.5, 0.0)]),
    ("30", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 1.0), seg(0.5, 0.5, 0.0, 0.0)]),
    ("31", &[seg(0.375, 0.0, 0.375, 1.0), seg(0.0, 0.25, 0.75, 0.75)]),
    ("32", &[seg(0.375, 0.0, 0.375, 1.0), seg(0.0, 0.75, 0.75, 0.25)]),
    (
        "33",
        &[seg(0.375, 0.0, 0.375, 1.0), seg(0.0, 0.0, 0.75, 1.0), seg(0.0, 1.0, 0.75, 0.0)],
    ),
    ("34", &[seg(0.0, 0.0, 0.5, 0.5), to(0.0, 1.0)]),
    ("35", &[seg(0.5, 0.0, 0.0, 0.5), to(0.5, 1.0)]),
    ("36", &[seg(0.0, 0.0, 0.75, 1.0), seg(0.0, 1.0, 0.75, 0.0)]),
    (
        "37",
        &[
            seg(0.0, 0.0, 0.75, 1.0),
            seg(0.0, 1.0, 0.75, 0.0),
            seg(0.0, 0.5, 0.375, 0.875),
            to(0.75, 0.5),
            to(0.375, 0.125),
            to(0.0, 0.5),
        ],
    ),
    ("38", &[seg(0.0, 0.0, 0.0, 1.0), to(0.75, 0.0), to(0.75, 1.0), to(0.0, 1.0)]),
    (
        "38-2",
        &[seg(0.0, 0.0, 0.0, 1.0), to(0.75, 0.75), seg(0.75, 0.0, 0.75, 1.0), to(0.0, 0.75)],
    ),
    ("39", &[seg(0.0, 0.0, 0.0, 1.0)]),
    ("40", &[seg(0.0, 1.0, 0.0, 0.25), to(0.5, 0.75), to(0.5, 0.0)]),
    ("41", &[seg(0.0, 0.0, 0.0, 0.75), to(0.5, 0.25), to(0.5, 1.0)]),
    ("42", &[seg(0.0, 0.0, 0.75, 0.75), to(0.375, 1.0), to(0.0, 0.75), to(0.75, 0.0)]),
    ("43", &[seg(0.0, 0.0, 0.5, 0.5), to(0.0, 1.0), seg(0.5, 0.0, 0.0, 0.5), to(0.5, 1.0)]),
    (
        "44",
        &[seg(0.25, 0.0, 0.25, 0.5), to(0.5, 0.75), to(0.25, 1.0), to(0.0, 0.75), to(0.25, 0.5)],
    ),
    (
        "45",
        &[
            seg(0.25, 0.0, 0.25, 0.5),
            to(0.5, 0.75),
            to(0.25, 1.0),
            to(0.0, 0.75),
            to(0.25, 0.5),
            seg(0.0, 0.5, 0.5, 0.5),
        ],
    ),
    ("46", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.5, 0.0, 0.5, 1.0), seg(0.0, 0.75, 0.5, 0.5)]),
    (
        "47",
        &[
            seg(0.0, 0.0, 0.0, 1.0),
            seg(0.5, 0.0, 0.5, 1.0),
            seg(0.0, 0.75, 0.5, 0.5),
            seg(0.0, 0.5, 0.5, 0.25),
        ],
    ),
    ("48", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), to(0.5, 0.0), seg(0.0, 0.75, 0.5, 0.5)]),
    ("49", &[seg(0.0, 0.0, 0.0, 1.0), to(0.5, 0.75), to(0.5, 0.0)]),
    ("50", &[seg(0.0, 0.0, 0.375, 1.0), to(0.75, 0.0)]),
    (
        "51",
        &[
            seg(0.0, 0.0, 0.375 / 2.0, 1.0),
            to(0.375 * 1.5, 0.0),
            seg(0.375, 0.0, 0.375 * 1.5, 1.0),
            to(0.75, 0.0),
        ],
    ),
    ("52", &[seg(0.0, 0.0, 0.375, 1.0), to(0.75, 0.0), seg(0.375, 0.0, 0.375, 1.0)]),
    ("53", &[seg(0.375, 0.0, 0.375, 0.5), to(0.0, 1.0), seg(0.375, 0.5, 0.75, 1.0)]),
    ("54", &[seg(0.375, 1.0, 0.375, 0.5), to(0.0, 0.0), seg(0.375, 0.5, 0.75, 0.0)]),
    ("55", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.5, 0.5, 0.25)]),
    ("56", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.5, 0.0, 0.25)]),
    ("57", &[seg(0.0, 0.0, 0.0, 1.0), seg(0.0, 0.75, 0.5, 0.5), to(0.0, 0.25)]),
    ("58", &[seg(0.5, 0.0, 0.5, 1.0), seg(0.5, 0.75, 0.0, 0.5), to(0.5, 0.25)]),
];

// The oldest Sindarin cirth. 13 and 15 alternated between h and s; here 35
// is s and 13 is h, 15 is left unmapped. 49 is added for "a".
pub static CERTHAS_DAERON: &ValueMap<'static> = &[
    (&["p", "P"], "1"),
    (&["b", "B"], "2"),
    (&["hw", "HW"], "5"),
    (&["m", "M"], "6"),
    (&["t", "T"], "8"),
    (&["d", "D"], "9"),
    (&["n", "N"], "12"),
    (&["h", "H"], "13"),
    (&["k", "K"], "18"),
    (&["g", "G"], "19"),
    (&["l", "L"], "31"),
    (&["s", "S"], "35"),
    (&["z", "Z"], "36"),
    (&["y", "Y"], "39"),
    (&["u", "U"], "42"),
    (&["e", "E"], "46"),
    (&["a", "A"], "49"),
    (&["o", "O"], "50"),
];

// Certhas Daeron plus the 13-17 and 23-28 series
pub static ANGERTHAS_DAERON: &ValueMap<'static> = &[
    (&["p", "P"], "1"),
    (&["b", "B"], "2"),
    (&["f", "F"], "3"),
    (&["v", "V"], "4"),
    (&["hw", "HW"], "5"),
    (&["m", "M"], "6"),
    (&["mb", "MB", "mh", "MH"], "7"),
    (&["t", "T"], "8"),
    (&["d", "D"], "9"),
    (&["th", "TH"], "10"),
    (&["dh", "DH"], "11"),
    (&["n", "N"], "12"),
    (&["ch", "CH"], "13"),
    (&["j", "J"], "14"),
    (&["sh", "SH"], "15"),
    (&["zh", "ZH"], "16"),
    (&["nj", "NJ"], "17"),
    (&["k", "K"], "18"),
    (&["g", "G"], "19"),
    (&["kh", "KH"], "20"),
    (&["gh", "GH"], "21"),
    (&["kw", "KW"], "23"),
    (&["gw", "GW"], "24"),
    (&["khw", "KHW"], "25"),
    (&["ghw", "GHW"], "26"),
    (&["ngw", "NGW"], "27"),
    (&["nw", "NW"], "28"),
    (&["r", "R"], "29"),
    (&["rh", "RH"], "30"),
    (&["l", "L"], "31"),
    (&["lh", "LH"], "32"),
    (&["ng", "NG"], "33"),
    (&["s", "S"], "35"),
    (&["z", "Z"], "36"),
    (&["nd", "ND"], "38"),
    (&["y", "Y", "i", "I"], "39"),
    (&["u", "U"], "42"),
    (&["w", "W"], "44"),
    (&["e", "E"], "46"),
    (&["a", "A"], "49"),
    (&["o", "O"], "50"),
    (&["h", "H"], "54"),
];

// The dwarves of Moria: 34 becomes h, 29/30 replace 14/16, 12 is r, 22 is
// n, 17 is z, 37 is ng and 38 is nj. "s" is bound twice; 54 wins.
pub static ANGERTHAS_MORIA: &ValueMap<'static> = &[
    (&["p", "P"], "1"),
    (&["b", "B"], "2"),
    (&["f", "F"], "3"),
    (&["v", "V"], "4"),
    (&["hw", "HW"], "5"),
    (&["m", "M"], "6"),
    (&["mb", "MB", "mh", "MH"], "7"),
    (&["t", "T"], "8"),
    (&["d", "D"], "9"),
    (&["th", "TH"], "10"),
    (&["dh", "DH"], "11"),
    (&["r", "R"], "12"),
    (&["ch", "CH"], "13"),
    (&["sh", "SH"], "15"),
    (&["z", "Z"], "17"),
    (&["k", "K"], "18"),
    (&["g", "G"], "19"),
    (&["kh", "KH"], "20"),
    (&["gh", "GH"], "21"),
    (&["n", "N"], "22"),
    (&["kw", "KW"], "23"),
    (&["gw", "GW"], "24"),
    (&["khw", "KHW"], "25"),
    (&["ghw", "GHW"], "26"),
    (&["ngw", "NGW"], "27"),
    (&["nw", "NW"], "28"),
    (&["j", "J"], "29"),
    (&["zh", "ZH"], "30"),
    (&["l", "L"], "31"),
    (&["lh", "LH"], "32"),
    (&["nd", "ND"], "33"),
    (&["h", "H"], "34"),
    (&["s", "S"], "35"),
    (&["ng", "NG"], "37"),
    (&["nj", "NJ"], "38"),
    (&["i", "I"], "39"),
    (&["y", "Y"], "40"),
    (&["hy", "HY"], "41"),
    (&["u", "U"], "42"),
    (&["w", "W"], "44"),
    (&["e", "E"], "46"),
    (&["a", "A"], "49"),
    (&["o", "O"], "50"),
    (&["s", "S"], "54"),
];

// Mode of Erebor: 43 is z, 17 is ks, 14/16 come back for j/zh and 29/30
// stand for g/gh.
pub static ANGERTHAS_EREBOR: &ValueMap<'static> = &[
    (&["p", "P"], "1"),
    (&["b", "B"], "2"),
    (&["f", "F"], "3"),
    (&["v", "V"], "4"),
    (&["hw", "HW"], "5"),
    (&["m", "M"], "6"),
    (&["mb", "MB", "mh", "MH"], "7"),
    (&["t", "T"], "8"),
    (&["d", "D"], "9"),
    (&["th", "TH"], "10"),
    (&["dh", "DH"], "11"),
    (&["r", "R"], "12"),
    (&["ch", "CH"], "13"),
    (&["j", "J"], "14"),
    (&["sh", "SH"], "15"),
    (&["zh", "ZH"], "16"),
    (&["ks", "KS", "x", "X"], "17"),
    (&["k", "K"], "18"),
    (&["kh", "KH"], "20"),
    (&["n", "N"], "22"),
    (&["kw", "KW"], "23"),
    (&["gw", "GW"], "24"),
    (&["khw", "KHW"], "25"),
    (&["ghw", "GHW"], "26"),
    (&["ngw", "NGW"], "27"),
    (&["nw", "NW"], "28"),
    (&["g", "G"], "29"),
    (&["gh", "GH"], "30"),
    (&["l", "L"], "31"),
    (&["lh", "LH"], "32"),
    (&["nd", "ND"], "33"),
    (&["h", "H"], "34"),
    (&["s", "S"], "35"),
    (&["ng", "NG"], "37"),
    (&["nj", "NJ"], "38"),
    (&["i", "I"], "39"),
    (&["y", "Y"], "40"),
    (&["hy", "HY"], "41"),
    (&["u", "U"], "42"),
    (&["z", "Z"], "43"),
    (&["w", "W"], "44"),
    (&["e", "E"], "46"),
    (&["a", "A"], "49"),
    (&["o", "O"], "50"),
    (&["s", "S"], "54"),
];

/// Which historical assignment of sounds to cirth is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CirthMode {
    CerthasDaeron,
    #[default]
    AngerthasDaeron,
    AngerthasMoria,
    AngerthasErebor,
}

impl CirthMode {
    pub const ALL: [CirthMode; 4] = [
        CirthMode::CerthasDaeron,
        CirthMode::AngerthasDaeron,
        CirthMode::AngerthasMoria,
        CirthMode::AngerthasErebor,
    ];

    /// Short name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            CirthMode::CerthasDaeron => "daeron",
            CirthMode::AngerthasDaeron => "angerthas",
            CirthMode::AngerthasMoria => "moria",
            CirthMode::AngerthasErebor => "erebor",
        }
    }

    pub fn value_map(self) -> &'static ValueMap<'static> {
        match self {
            CirthMode::CerthasDaeron => CERTHAS_DAERON,
            CirthMode::AngerthasDaeron => ANGERTHAS_DAERON,
            CirthMode::AngerthasMoria => ANGERTHAS_MORIA,
            CirthMode::AngerthasErebor => ANGERTHAS_EREBOR,
        }
    }
}

impl fmt::Display for CirthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CirthMode {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self> {
        CirthMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConfigError::InvalidParameter {
                    name: "cirth mode",
                    reason: format!("{s:?} is not one of daeron, angerthas, moria, erebor"),
                }
                .into()
            })
    }
}

/// The Cirth font with the value map of `mode`
pub fn font(mode: CirthMode) -> Result<Font> {
    let mut font = Font::new("cirth", GLYPH_SPACING, build_glyphs(GLYPHS));
    set_mode(&mut font, mode)?;
    Ok(font)
}

/// Rebind `font` to another mode's value map
pub fn set_mode(font: &mut Font, mode: CirthMode) -> Result<()> {
    log::debug!("Cirth mode: {mode}");
    font.set_value_map(mode.value_map())
}
