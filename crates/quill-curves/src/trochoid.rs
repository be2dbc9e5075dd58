//! Roulettes of a circle rolling on a circle
//!
//! A circle of radius `r` rolls inside (hypo) or outside (epi) a fixed
//! circle of radius `R`; the traced point sits at distance `d` from the
//! rolling circle's center. With `d = r` the point is on the rim and the
//! curve grows cusps; [`Trochoid::hypocycloid`] and
//! [`Trochoid::epicycloid`] build those.

use std::f64::consts::PI;

use quill_core::{
    error::{ConfigError, Result},
    traits::Curve,
    types::Point,
};

use crate::require_positive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrochoidKind {
    /// Rolling inside the fixed circle
    Hypo,
    /// Rolling outside the fixed circle
    Epi,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trochoid {
    kind: TrochoidKind,
    big_r: u32,
    r: u32,
    d: f64,
}

impl Trochoid {
    /// Radii must be at least 1 so the curve closes; `d` must be finite.
    pub fn new(kind: TrochoidKind, big_r: u32, r: u32, d: f64) -> Result<Self> {
        require_positive("R", big_r)?;
        require_positive("r", r)?;
        if !d.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "d",
                reason: format!("{d} is not finite"),
            }
            .into());
        }
        Ok(Self { kind, big_r, r, d })
    }

    pub fn hypotrochoid(big_r: u32, r: u32, d: f64) -> Result<Self> {
        Self::new(TrochoidKind::Hypo, big_r, r, d)
    }

    pub fn epitrochoid(big_r: u32, r: u32, d: f64) -> Result<Self> {
        Self::new(TrochoidKind::Epi, big_r, r, d)
    }

    /// Hypotrochoid traced from the rim
    pub fn hypocycloid(big_r: u32, r: u32) -> Result<Self> {
        Self::new(TrochoidKind::Hypo, big_r, r, f64::from(r))
    }

    /// Epitrochoid traced from the rim
    pub fn epicycloid(big_r: u32, r: u32) -> Result<Self> {
        Self::new(TrochoidKind::Epi, big_r, r, f64::from(r))
    }

    pub fn kind(&self) -> TrochoidKind {
        self.kind
    }

    /// Ratio of the fixed radius to the rolling one
    pub fn k(&self) -> f64 {
        f64::from(self.big_r) / f64::from(self.r)
    }

    /// Turns around the fixed circle before the curve closes
    pub fn rotations(&self) -> f64 {
        let (big_r, r) = (self.big_r, self.r);
        if big_r % r == 0 {
            1.0
        } else if r % big_r == 0 {
            f64::from(r / big_r)
        } else {
            f64::from(r)
        }
    }

    /// Sharp corners on the curve; only rim points make any
    pub fn cusps(&self) -> u32 {
        let (big_r, r) = (self.big_r, self.r);
        if self.d != f64::from(r) {
            0
        } else if r % big_r == 0 {
            1
        } else if big_r % r == 0 {
            big_r / r
        } else {
            big_r
        }
    }

    fn point_at(&self, theta: f64) -> Point {
        let (r, d, k) = (f64::from(self.r), self.d, self.k());
        match self.kind {
            TrochoidKind::Hypo => {
                let m = k - 1.0;
                Point::new(
                    r * m * theta.cos() + d * (m * theta).cos(),
                    r * m * theta.sin() - d * (m * theta).sin(),
                )
            },
            TrochoidKind::Epi => {
                let m = k + 1.0;
                Point::new(
                    r * m * theta.cos() - d * (m * theta).cos(),
                    r * m * theta.sin() - d * (m * theta).sin(),
                )
            },
        }
    }
}

impl Curve for Trochoid {
    fn name(&self) -> &'static str {
        match self.kind {
            TrochoidKind::Hypo => "hypotrochoid",
            TrochoidKind::Epi => "epitrochoid",
        }
    }

    fn compute(&self, steps: usize) -> Vec<Point> {
        let rotations = self.rotations();
        log::debug!(
            "{} R={} r={} d={} ({} turns, {} cusps): {} points",
            self.name(),
            self.big_r,
            self.r,
            self.d,
            rotations,
            self.cusps(),
            steps
        );
        (0..steps)
            .map(|i| self.point_at(2.0 * PI * rotations * i as f64 / steps as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_cover_the_period() {
        assert_eq!(Trochoid::hypotrochoid(6, 3, 1.0).unwrap().rotations(), 1.0);
        assert_eq!(Trochoid::hypotrochoid(3, 6, 1.0).unwrap().rotations(), 2.0);
        assert_eq!(Trochoid::hypotrochoid(5, 3, 5.0).unwrap().rotations(), 3.0);
    }

    #[test]
    fn closes_after_its_rotations() {
        let curves = [
            Trochoid::hypotrochoid(5, 3, 5.0).unwrap(),
            Trochoid::epitrochoid(5, 3, 5.0).unwrap(),
            Trochoid::hypocycloid(3, 6).unwrap(),
            Trochoid::epicycloid(7, 2).unwrap(),
        ];
        for curve in curves {
            let start = curve.point_at(0.0);
            let end = curve.point_at(2.0 * PI * curve.rotations());
            assert!(
                (start.x - end.x).abs() < 1e-9 && (start.y - end.y).abs() < 1e-9,
                "{curve:?} ends at {end:?}"
            );
        }
    }

    #[test]
    fn cycloids_have_cusps() {
        assert_eq!(Trochoid::hypocycloid(6, 2).unwrap().cusps(), 3);
        assert_eq!(Trochoid::epicycloid(5, 3).unwrap().cusps(), 5);
        assert_eq!(Trochoid::epicycloid(2, 4).unwrap().cusps(), 1);
        assert_eq!(Trochoid::hypotrochoid(5, 3, 5.0).unwrap().cusps(), 0);
    }

    #[test]
    fn astroid_touches_its_cusps() {
        // R = 4r: the four cusps lie on the fixed circle
        let points = Trochoid::hypocycloid(4, 1).unwrap().compute(4);
        let expected = [(4.0, 0.0), (0.0, 4.0), (-4.0, 0.0), (0.0, -4.0)];
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?}");
        }
    }

    #[test]
    fn epitrochoid_starts_inside_out() {
        let p = Trochoid::epitrochoid(5, 3, 5.0).unwrap().compute(8)[0];
        // r(k+1) - d = 3 * (8/3) - 5
        assert!((p.x - 3.0).abs() < 1e-12);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(Trochoid::hypotrochoid(0, 3, 1.0).is_err());
        assert!(Trochoid::epitrochoid(5, 0, 1.0).is_err());
        assert!(Trochoid::hypotrochoid(5, 3, f64::INFINITY).is_err());
    }
}
