//! Gyrovectors in the Poincaré disk.
//!
//! A point of the hyperbolic plane is a complex number `z` with `|z| < 1`.
//! Translation is Möbius addition and scaling is gyro-scalar multiplication,
//! so a lattice embedding written against [`Point`] places hyperbolic
//! vertices with exactly the same code as flat ones.
//!
//! ```text
//! a ⊕ b   = (a + b) / (1 + ā·b)
//! t ⊗ a   = tanh(t · atanh|a|) · a / |a|
//! |a|_h   = ln((1 + |a|) / (1 − |a|))
//! d(a, b) = ln((|1 − ā·b| + |b − a|) / (|1 − ā·b| − |b − a|))
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{Curvature, HypError, Point};

/// Below this radius a gyrovector is treated as the origin when scaling.
const ORIGIN_EPS: f64 = 1e-15;

/// A point of the Poincaré disk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GyroPoint {
    pub x: f64,
    pub y: f64,
}

impl GyroPoint {
    /// Checked constructor: the point must be finite and strictly inside the
    /// unit disk.
    pub fn try_new(x: f64, y: f64) -> Result<Self, HypError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(HypError::NonFinite { x, y });
        }
        let norm = x.hypot(y);
        if norm >= 1.0 {
            return Err(HypError::OutsideDisk { norm });
        }
        Ok(Self { x, y })
    }

    /// Radius of the underlying coordinate, `|z|`.
    pub fn euclidean_magnitude(&self) -> f64 {
        self.to_complex().norm()
    }

    #[inline]
    fn from_complex(z: Complex64) -> Self {
        Self { x: z.re, y: z.im }
    }
}

impl Point for GyroPoint {
    const CURVATURE: Curvature = Curvature::Hyperbolic;

    fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn add(&self, other: &Self) -> Self {
        let a = self.to_complex();
        let b = other.to_complex();
        Self::from_complex((a + b) / (Complex64::new(1.0, 0.0) + a.conj() * b))
    }

    fn scale(&self, t: f64) -> Self {
        let r = self.euclidean_magnitude();
        if r < ORIGIN_EPS {
            return Self::origin();
        }
        Self::from_complex(self.unit().to_complex() * (t * r.atanh()).tanh())
    }

    fn magnitude(&self) -> f64 {
        let r = self.euclidean_magnitude();
        ((1.0 + r) / (1.0 - r)).ln()
    }

    fn distance(&self, other: &Self) -> f64 {
        let a = self.to_complex();
        let b = other.to_complex();
        let denom = (Complex64::new(1.0, 0.0) - a.conj() * b).norm();
        let gap = (b - a).norm();
        ((denom + gap) / (denom - gap)).ln()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
