//! Flat-plane points backed by complex arithmetic.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{Curvature, HypError, Point};

/// A point of the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EuclideanPoint {
    pub x: f64,
    pub y: f64,
}

impl EuclideanPoint {
    /// Checked constructor: rejects NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, HypError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(HypError::NonFinite { x, y });
        }
        Ok(Self { x, y })
    }

    #[inline]
    fn from_complex(z: Complex64) -> Self {
        Self { x: z.re, y: z.im }
    }
}

impl Point for EuclideanPoint {
    const CURVATURE: Curvature = Curvature::Euclidean;

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
        Self::from_complex(self.to_complex() + other.to_complex())
    }

    fn scale(&self, t: f64) -> Self {
        Self::from_complex(self.to_complex() * t)
    }

    fn magnitude(&self) -> f64 {
        self.to_complex().norm()
    }

    fn distance(&self, other: &Self) -> f64 {
        (other.to_complex() - self.to_complex()).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let a = EuclideanPoint::from_xy(1.0, 2.0);
        let b = EuclideanPoint::from_xy(-3.0, 0.5);
        assert_eq!(a.add(&b), EuclideanPoint::from_xy(-2.0, 2.5));
    }

    #[test]
    fn scale_and_magnitude() {
        let a = EuclideanPoint::from_xy(3.0, 4.0);
        assert!((a.magnitude() - 5.0).abs() < 1e-12);
        assert!((a.scale(2.0).magnitude() - 10.0).abs() < 1e-12);
        assert!((a.scale(-1.0).x() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = EuclideanPoint::from_xy(1.0, 1.0);
        let b = EuclideanPoint::from_xy(4.0, 5.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(EuclideanPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(EuclideanPoint::try_new(1.0, f64::INFINITY).is_err());
        assert!(EuclideanPoint::try_new(1.0, -2.0).is_ok());
    }
}
