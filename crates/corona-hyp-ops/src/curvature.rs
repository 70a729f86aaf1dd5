//! Curvature classification of a {p,q} tiling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the three constant-curvature planes a {p,q} tiling lives in.
///
/// Decided by comparing `(p−2)(q−2)` with 4: below is spherical, equal is
/// flat, above is hyperbolic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curvature {
    Spherical,
    Euclidean,
    Hyperbolic,
}

impl Curvature {
    /// Classify a tiling. Callers validate `p, q ≥ 3` first; smaller values
    /// saturate to the spherical side instead of underflowing.
    pub fn of(p: usize, q: usize) -> Self {
        let product = p.saturating_sub(2) * q.saturating_sub(2);
        match product.cmp(&4) {
            std::cmp::Ordering::Less => Curvature::Spherical,
            std::cmp::Ordering::Equal => Curvature::Euclidean,
            std::cmp::Ordering::Greater => Curvature::Hyperbolic,
        }
    }

    /// `+1` spherical, `0` Euclidean, `−1` hyperbolic.
    pub fn sign(self) -> i32 {
        match self {
            Curvature::Spherical => 1,
            Curvature::Euclidean => 0,
            Curvature::Hyperbolic => -1,
        }
    }

    /// True when the tiling extends without bound (flat or hyperbolic).
    pub fn is_open(self) -> bool {
        !matches!(self, Curvature::Spherical)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Curvature::Spherical => "spherical",
            Curvature::Euclidean => "euclidean",
            Curvature::Hyperbolic => "hyperbolic",
        };
        f.write_str(name)
    }
}
