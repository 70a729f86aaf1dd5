//! # corona-hyp-ops
//!
//! Two-dimensional point arithmetic for regular {p,q} tilings.
//!
//! Every lattice embedding in the workspace goes through the [`Point`]
//! capability trait defined here. The embedding code is written once against
//! the trait and instantiated with either arithmetic:
//!
//! | Type | Model | `add` | `scale` |
//! |---|---|---|---|
//! | [`EuclideanPoint`] | flat plane | `a + b` | `t · a` |
//! | [`GyroPoint`] | Poincaré disk | `(a + b) / (1 + ā·b)` | `tanh(t·atanh\|a\|) · â` |
//!
//! Rotation is the ordinary planar rotation in both models (rotations about
//! the origin are isometries of the disk).
//!
//! ## Trigonometry
//!
//! [`trig`] turns tiling parameters into lengths: the Poincaré radius of a
//! tile edge, centre-to-corner transversals, and the conversions between
//! hyperbolic distance and Poincaré radius. All of them are pure functions.

pub mod curvature;
pub mod error;
pub mod euclidean;
pub mod gyro;
pub mod trig;

use std::fmt::Debug;

use num_complex::Complex64;
use serde::Serialize;

pub use curvature::Curvature;
pub use error::HypError;
pub use euclidean::EuclideanPoint;
pub use gyro::GyroPoint;
pub use trig::{
    euclidean_transversal_length, hyperbolic_side_length, hyperbolic_to_poincare,
    hyperbolic_transversal_length, poincare_side_length, poincare_to_hyperbolic,
};

// ─────────────────────────────────────────────
// Point capability
// ─────────────────────────────────────────────

/// An immutable 2D position with the operations a lattice embedding needs.
///
/// Implementations differ only in how `add`, `scale`, `magnitude` and
/// `distance` are defined. `rotate` and `phase` act on the underlying
/// Euclidean coordinates in both models.
pub trait Point: Copy + Debug + PartialEq + Serialize + Send + Sync + 'static {
    /// Geometry this arithmetic models.
    const CURVATURE: Curvature;

    /// The additive identity.
    fn origin() -> Self;

    /// Build from raw coordinates. No validation: use the concrete type's
    /// `try_new` when the input is untrusted.
    fn from_xy(x: f64, y: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Translate `self` by `other` (vector sum or Möbius sum).
    fn add(&self, other: &Self) -> Self;

    /// Scalar (or gyro-scalar) multiplication.
    fn scale(&self, t: f64) -> Self;

    /// Additive inverse. Equal to `-z` in both models.
    fn neg(&self) -> Self {
        Self::from_xy(-self.x(), -self.y())
    }

    /// `(-other) ⊕ self`. Plain subtraction for flat points; in the disk it
    /// is the left gyro-difference, not the offset between the two points
    /// (that is [`relative`](Self::relative)).
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Direction of the underlying coordinate, scaled to Euclidean length 1.
    /// The origin maps to itself.
    ///
    /// For [`GyroPoint`] the result lies on the boundary circle, so it is a
    /// direction to scale, not a disk point.
    fn unit(&self) -> Self {
        let r = self.x().hypot(self.y());
        if r == 0.0 {
            return Self::origin();
        }
        Self::from_xy(self.x() / r, self.y() / r)
    }

    /// Rotate about the origin by `theta` radians.
    fn rotate(&self, theta: f64) -> Self {
        let z = self.to_complex() * Complex64::from_polar(1.0, theta);
        Self::from_xy(z.re, z.im)
    }

    /// Distance from the origin in the model's metric.
    fn magnitude(&self) -> f64;

    /// Distance between two points in the model's metric.
    fn distance(&self, other: &Self) -> f64;

    /// Angle of the underlying coordinate, in `(-π, π]`.
    fn phase(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// The offset that carries `self` to `target`: `(-self) ⊕ target`.
    ///
    /// Its phase is the direction of `target` as seen from `self`, which is
    /// what neighbor placement rotates against.
    fn relative(&self, target: &Self) -> Self {
        self.neg().add(target)
    }

    fn to_complex(&self) -> Complex64 {
        Complex64::new(self.x(), self.y())
    }

    fn to_array(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
