//! Rhodonea curves

use std::f64::consts::PI;

use quill_core::{error::Result, traits::Curve, types::Point};

use crate::{gcd, require_positive};

/// The rose `r = cos(kθ)` with `k = n/d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rose {
    n: u32,
    d: u32,
}

impl Rose {
    /// Both parameters must be at least 1. The ratio is kept in lowest
    /// terms.
    pub fn new(n: u32, d: u32) -> Result<Self> {
        require_positive("n", n)?;
        require_positive("d", d)?;
        let g = gcd(n, d);
        Ok(Self { n: n / g, d: d / g })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn d(&self) -> u32 {
        self.d
    }

    pub fn k(&self) -> f64 {
        f64::from(self.n) / f64::from(self.d)
    }

    /// Full turns of θ needed to close the curve
    pub fn rotations(&self) -> f64 {
        if self.n % self.d == 0 {
            // Integer k: odd petals close after half a turn
            if (self.n / self.d) % 2 == 0 {
                1.0
            } else {
                0.5
            }
        } else if self.n % 2 == 1 && self.d % 2 == 1 {
            f64::from(self.d) / 2.0
        } else {
            f64::from(self.d)
        }
    }

    fn point_at(&self, theta: f64) -> Point {
        let r = (self.k() * theta).cos();
        Point::new(r * theta.cos(), r * theta.sin())
    }
}

impl Curve for Rose {
    fn name(&self) -> &'static str {
        "rose"
    }

    fn compute(&self, steps: usize) -> Vec<Point> {
        let rotations = self.rotations();
        log::debug!(
            "Rose n={} d={} ({} turns): {} points",
            self.n,
            self.d,
            rotations,
            steps
        );
        (0..steps)
            .map(|i| self.point_at(2.0 * PI * rotations * i as f64 / steps as f64))
            .collect()
    }
}
