//! Lissajous figures

use std::f64::consts::PI;

use quill_core::{
    error::{ConfigError, Result},
    traits::Curve,
    types::Point,
};

use crate::require_positive;

/// `(sin(aθ + πφ), sin(bθ))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    a: u32,
    b: u32,
    phi: f64,
}

impl Lissajous {
    /// `phi` is the phase in half turns and must lie in `[-0.5, 0.5]`.
    ///
    /// Frequencies that are both even are halved until one is odd; the
    /// figure is the same, traced once instead of several times.
    pub fn new(a: u32, b: u32, phi: f64) -> Result<Self> {
        require_positive("a", a)?;
        require_positive("b", b)?;
        if !(-0.5..=0.5).contains(&phi) {
            return Err(ConfigError::InvalidParameter {
                name: "phi",
                reason: format!("{phi} is outside [-0.5, 0.5]"),
            }
            .into());
        }

        let (mut a, mut b) = (a, b);
        while a % 2 == 0 && b % 2 == 0 {
            a /= 2;
            b /= 2;
        }
        Ok(Self { a, b, phi })
    }

    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    fn point_at(&self, theta: f64) -> Point {
        let (a, b) = (f64::from(self.a), f64::from(self.b));
        Point::new((a * theta + PI * self.phi).sin(), (b * theta).sin())
    }
}

impl Curve for Lissajous {
    fn name(&self) -> &'static str {
        "lissajous"
    }

    fn compute(&self, steps: usize) -> Vec<Point> {
        log::debug!(
            "Lissajous a={} b={} phi={}: {} points",
            self.a,
            self.b,
            self.phi,
            steps
        );
        (0..steps)
            .map(|i| self.point_at(2.0 * PI * i as f64 / steps as f64))
            .collect()
    }
}
