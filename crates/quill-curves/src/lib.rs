//! Closed plane curves, sampled into points
//!
//! Every generator implements [`Curve`]: give it a number of steps and it
//! returns that many points spread evenly over one full period, ready for
//! `Pipeline::trace`. Parameters are checked once, at construction, so
//! `compute` can't fail.
//!
//! - [`Lissajous`] - Two sines at different frequencies
//! - [`Rose`] - Rhodonea, `r = cos(kθ)`
//! - [`Trochoid`] - A circle rolling inside or outside another one

// this_file: crates/quill-curves/src/lib.rs

pub mod lissajous;
pub mod rose;
pub mod trochoid;

pub use lissajous::Lissajous;
pub use quill_core::Curve;
pub use rose::Rose;
pub use trochoid::{Trochoid, TrochoidKind};

use quill_core::error::{ConfigError, Result};

/// Reject a zero where a positive integer is needed
pub(crate) fn require_positive(name: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
