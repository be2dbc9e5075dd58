//! Quill - pen drawings from numbers and runes
//!
//! Quill draws two kinds of things with one pen:
//! 1. Parametric curves (Lissajous figures, roses, hypo- and epitrochoids)
//! 2. Text in stroke fonts (Ogham and the Cirth in four modes)
//!
//! Either one is fitted into the canvas of a pen engine, aspect ratio
//! kept, and drawn stroke by stroke. The raster engine paints into a
//! pixmap that the exporters turn into PNG or PNM files; the plotter
//! engine moves a Line-us arm over paper.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "raster")]
//! # {
//! use quill::prelude::*;
//! use quill::render_raster::RasterEngine;
//!
//! let params = RenderParams::default();
//! let engine = RasterEngine::new(200, 60, &params)?;
//! let mut pipeline = Pipeline::builder()
//!     .engine(Box::new(engine))
//!     .params(params)
//!     .build()?;
//!
//! let font = quill::fonts::ogham::font()?;
//! let outcome = pipeline.write("ogham", &font)?;
//! assert!(outcome.unresolved.is_empty());
//! # }
//! # Ok::<(), quill::error::QuillError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `raster`: tiny-skia raster engine
//! - `plotter`: Line-us plotter engine
//! - `export`: PNG and PNM exporters
//! - `full`: All of the above (also the default)

pub use quill_core::{error, fit, font, layout, tokenize, traits, types};
pub use quill_core::{Color, Pipeline, RenderParams};

pub use quill_curves as curves;
pub use quill_fonts as fonts;

#[cfg(feature = "export")]
pub use quill_export as export;

#[cfg(feature = "plotter")]
pub use quill_plotter as plotter;

#[cfg(feature = "raster")]
pub use quill_render_raster as render_raster;

/// Names of the pen engines compiled in
pub const ENGINES: &[&str] = &[
    #[cfg(feature = "raster")]
    "raster",
    #[cfg(feature = "plotter")]
    "plotter",
];

/// Common imports for typical usage
pub mod prelude {
    pub use quill_core::{
        error::{QuillError, Result},
        font::Font,
        traits::{Curve, Exporter, PenEngine},
        types::{BBox, Point, RenderOutput},
        Color, Fit, Pipeline, RenderParams, WriteOutcome,
    };
    pub use quill_curves::{Lissajous, Rose, Trochoid, TrochoidKind};
    pub use quill_fonts::CirthMode;
}
