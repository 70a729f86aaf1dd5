//! Periodic boundary for flat tilings: weld opposite sides of the outermost
//! corona, then trim what cannot be closed.
//!
//! The outermost corona of a flat {p,q} patch is an `S`-gon (`S = 4` for the
//! square tiling, `S = 6` for the triangular and hexagonal ones) whose sides
//! each hold `L = N/S + 1` vertices, `N` being the corona's population.
//! Corners are shared by neighboring sides. Welding side `i` to side
//! `i + S/2` (one of them reversed) merges each pair's neighborhoods, which
//! turns the patch into a torus. Perimeter vertices that still miss edges
//! afterwards are isolated, highest index first, until the graph is regular
//! or the perimeter is used up.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adjacency::SortedAdjacency;
use crate::error::LatticeError;

/// Outcome of [`stitch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicClosure {
    /// Number of perimeter sides welded pairwise.
    pub sides: usize,
    /// Vertices per side, corners included.
    pub side_length: usize,
    /// Perimeter vertices isolated after welding.
    pub trimmed: usize,
    /// Vertices left with a degree other than 0 or `q`.
    pub deficient: usize,
}

impl PeriodicClosure {
    pub fn is_complete(&self) -> bool {
        self.deficient == 0
    }

    /// Turn an incomplete closure into an error.
    pub fn ensure_complete(&self) -> Result<(), LatticeError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(LatticeError::IncompletePeriodicClosure {
                trimmed: self.trimmed,
                deficient: self.deficient,
            })
        }
    }
}

/// Number of perimeter sides of a flat {p,q} patch.
pub fn perimeter_sides(p: usize, q: usize) -> usize {
    if (p, q) == (4, 4) {
        4
    } else {
        6
    }
}

/// Weld the outermost corona of a flat patch onto itself.
///
/// `outer_population` is the population of the last corona; its vertices are
/// the top `outer_population` indices of `adjacency`. An incomplete closure
/// is reported in the return value and logged, not raised.
pub(crate) fn stitch(
    adjacency: &mut SortedAdjacency,
    p: usize,
    q: usize,
    outer_population: usize,
) -> Result<PeriodicClosure, LatticeError> {
    let s = perimeter_sides(p, q);
    let n = outer_population;
    let side_length = n / s + 1;
    let total = adjacency.len();

    let perimeter: Vec<usize> = (total - n..total).rev().collect();
    let step = side_length.saturating_sub(1).max(1);
    let sides: Vec<Vec<usize>> = (0..n)
        .step_by(step)
        .map(|i| (0..side_length).map(|j| perimeter[(i + j) % n]).collect())
        .collect();

    if sides.len() < s {
        return Err(LatticeError::PerimeterMismatch { expected: s, found: sides.len() });
    }

    for i in 0..s {
        weld(adjacency, &sides[i], &sides[(i + s / 2) % s]);
    }

    let mut trimmed = 0;
    for &v in &perimeter {
        if adjacency.is_regular(q) {
            break;
        }
        adjacency.isolate(v);
        trimmed += 1;
    }

    let closure = PeriodicClosure {
        sides: s,
        side_length,
        trimmed,
        deficient: adjacency.deficient(q),
    };

    if closure.is_complete() {
        debug!(sides = s, side_length, trimmed, "periodic boundary closed");
    } else {
        warn!(
            sides = s,
            side_length,
            trimmed,
            deficient = closure.deficient,
            "periodic boundary incomplete after exhausting the perimeter"
        );
    }
    Ok(closure)
}

/// Merge each vertex of `a` (walked in reverse) with its partner in `b`:
/// each gains the other's neighbors.
fn weld(adjacency: &mut SortedAdjacency, a: &[usize], b: &[usize]) {
    for (&x, &y) in a.iter().rev().zip(b) {
        for n in adjacency.neighbors(y).to_vec() {
            adjacency.connect(x, n);
        }
        for n in adjacency.neighbors(x).to_vec() {
            adjacency.connect(y, n);
        }
    }
}
