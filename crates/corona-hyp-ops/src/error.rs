//! Error types for point arithmetic and tiling trigonometry.

/// Errors that can occur while constructing points or deriving tiling lengths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HypError {
    /// A gyrovector was outside the open unit disk (|z| ≥ 1.0).
    #[error("point outside Poincaré disk: |z| = {norm:.6} ≥ 1.0")]
    OutsideDisk { norm: f64 },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    /// `p` or `q` below 3 does not describe a polygon tiling.
    #[error("invalid tiling {{{p},{q}}}: both p and q must be at least 3")]
    InvalidTiling { p: usize, q: usize },

    /// A hyperbolic-only formula was asked for a flat or spherical tiling.
    #[error("tiling {{{p},{q}}} is not hyperbolic: (p-2)(q-2) = {product} ≤ 4")]
    NotHyperbolic { p: usize, q: usize, product: usize },
}
