//! Tiling trigonometry: edge and transversal lengths for {p,q} tilings.
//!
//! With `a = 2π/p` and `b = π/q`:
//!
//! ```text
//! side(p, q)        = acosh((cos a + cos² b) / sin² b)
//! transversal(p, q) = acosh((cos b + cos a · cos b) / (sin a · sin b))
//! ```
//!
//! Both are hyperbolic distances. [`hyperbolic_to_poincare`] converts a
//! distance from the origin into the matching Poincaré-disk radius.

use std::f64::consts::PI;

use crate::{Curvature, HypError};

fn validate(p: usize, q: usize) -> Result<(), HypError> {
    if p < 3 || q < 3 {
        return Err(HypError::InvalidTiling { p, q });
    }
    Ok(())
}

fn validate_hyperbolic(p: usize, q: usize) -> Result<(), HypError> {
    validate(p, q)?;
    if Curvature::of(p, q) != Curvature::Hyperbolic {
        return Err(HypError::NotHyperbolic {
            p,
            q,
            product: (p - 2) * (q - 2),
        });
    }
    Ok(())
}

/// Poincaré radius of a point at hyperbolic distance `d` from the origin.
pub fn hyperbolic_to_poincare(d: f64) -> f64 {
    (0.5 * d).tanh()
}

/// Hyperbolic distance from the origin of a point at Poincaré radius `r`.
pub fn poincare_to_hyperbolic(r: f64) -> f64 {
    ((1.0 + r) / (1.0 - r)).ln()
}

/// Hyperbolic length of one edge of the regular {p,q} tiling.
///
/// The length is fixed by `(p, q)`; there is no free scale in hyperbolic space.
///
/// # Errors
///
/// [`HypError::InvalidTiling`] for `p < 3` or `q < 3`,
/// [`HypError::NotHyperbolic`] when `(p−2)(q−2) ≤ 4`.
pub fn hyperbolic_side_length(p: usize, q: usize) -> Result<f64, HypError> {
    validate_hyperbolic(p, q)?;
    let a = 2.0 * PI / p as f64;
    let b = PI / q as f64;
    Ok(((a.cos() + b.cos() * b.cos()) / (b.sin() * b.sin())).acosh())
}

/// Poincaré radius of the vertex adjacent to the origin: the edge length an
/// embedding seeds its guide vector with.
pub fn poincare_side_length(p: usize, q: usize) -> Result<f64, HypError> {
    hyperbolic_side_length(p, q).map(hyperbolic_to_poincare)
}

/// Hyperbolic distance from a lattice vertex to the corners of the polygon
/// drawn around it.
pub fn hyperbolic_transversal_length(p: usize, q: usize) -> Result<f64, HypError> {
    validate_hyperbolic(p, q)?;
    let a = 2.0 * PI / p as f64;
    let b = PI / q as f64;
    Ok(((b.cos() + a.cos() * b.cos()) / (a.sin() * b.sin())).acosh())
}

/// Flat counterpart of [`hyperbolic_transversal_length`], in units of the
/// edge length.
pub fn euclidean_transversal_length(p: usize, q: usize) -> Result<f64, HypError> {
    validate(p, q)?;
    Ok((PI / p as f64).sin() / (2.0 * PI / q as f64).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_length_of_3_7() {
        let d = hyperbolic_side_length(3, 7).unwrap();
        assert!((d - 1.090_549_663_507_087).abs() < 1e-12, "got {d}");
        let r = poincare_side_length(3, 7).unwrap();
        assert!((r - 0.496_970_425_395_181_27).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn side_length_rejects_flat_and_spherical() {
        assert!(matches!(
            hyperbolic_side_length(4, 4),
            Err(HypError::NotHyperbolic { product: 4, .. })
        ));
        assert!(matches!(
            poincare_side_length(3, 5),
            Err(HypError::NotHyperbolic { .. })
        ));
        assert!(matches!(
            hyperbolic_side_length(2, 9),
            Err(HypError::InvalidTiling { p: 2, q: 9 })
        ));
    }

    #[test]
    fn poincare_conversion_roundtrip() {
        for d in [0.0, 0.3, 1.0, 2.5, 6.0] {
            let back = poincare_to_hyperbolic(hyperbolic_to_poincare(d));
            assert!((back - d).abs() < 1e-10, "{d} -> {back}");
        }
    }

    #[test]
    fn side_length_grows_with_q() {
        let a = hyperbolic_side_length(3, 7).unwrap();
        let b = hyperbolic_side_length(3, 8).unwrap();
        let c = hyperbolic_side_length(3, 12).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn euclidean_transversal_of_square_tiling() {
        let t = euclidean_transversal_length(4, 4).unwrap();
        assert!((t - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn transversal_is_finite_for_hyperbolic() {
        let t = hyperbolic_transversal_length(3, 7).unwrap();
        assert!(t.is_finite() && t > 0.0);
        assert!(hyperbolic_transversal_length(6, 3).is_err());
    }
}
