//! Ring-by-ring construction of a {p,q} adjacency structure.
//!
//! ## Growth protocol
//!
//! 1. **Seed**: vertex 0, no neighbors.
//! 2. **First corona**: `q·(p−2)` vertices joined in a cycle; vertex 0 is
//!    joined to every `(p−2)`-th one, so the seed ends with degree `q` and
//!    the `q` polygons around it are closed.
//! 3. **Later coronas**: each vertex of the previous corona, in index order,
//!    opens the polygons it still lacks via [`extend_corner`]. New vertices
//!    are appended, so the next corona is exactly the index range created
//!    while sweeping the previous one.
//!
//! Nothing here knows coordinates. The shape of the tiling is carried by
//! index order alone.

use tracing::{debug, trace};

use crate::adjacency::SortedAdjacency;
use crate::error::LatticeError;

/// Output of ring growth: the open patch and the size of each corona.
#[derive(Debug, Clone)]
pub(crate) struct Grown {
    pub adjacency: SortedAdjacency,
    pub ring_population: Vec<usize>,
}

/// Grow `rings` coronas around a seed. `p, q ≥ 3` is checked by the caller.
pub(crate) fn populate(p: usize, q: usize, rings: usize) -> Result<Grown, LatticeError> {
    let mut adjacency = SortedAdjacency::with_vertices(1);
    let mut ring_population = vec![1];

    if rings == 0 {
        return Ok(Grown { adjacency, ring_population });
    }

    first_corona(&mut adjacency, p, q);

    let mut start = 1;
    for ring in 1..rings {
        let end = adjacency.len();
        for site in start..end {
            let (left, right) = match adjacency.neighbors(site) {
                [left, right, ..] => (*left, *right),
                _ => return Err(LatticeError::GrowthStalled { vertex: site }),
            };
            extend_corner(&mut adjacency, p, q, left, site, right)?;
        }
        ring_population.push(end - start);
        debug!(ring, population = end - start, vertices = adjacency.len(), "corona closed");
        start = end;
    }
    ring_population.push(adjacency.len() - start);

    Ok(Grown { adjacency, ring_population })
}

fn first_corona(adjacency: &mut SortedAdjacency, p: usize, q: usize) {
    let n = q * (p - 2);
    adjacency.push_vertices(n);
    for i in 0..n {
        adjacency.connect(i + 1, (i + 1) % n + 1);
    }
    for branch in (1..=n).step_by(p - 2) {
        adjacency.connect(0, branch);
    }
}

/// Open the missing polygons at `current`, a vertex of the outermost corona.
///
/// `left` and `right` are the two highest-indexed neighbors of `current`,
/// i.e. the ones attached most recently. New vertices form a chain from
/// `left` to `right`; every `(p−2)`-th chain vertex is a branch joined to
/// `current`, and the `p−3` vertices between branches close a polygon side.
///
/// When `current` is already saturated, the chain still has to reach the
/// next vertex that can take an edge: the walk from `right` skips saturated
/// vertices and shortens the chain by one for each skip.
pub(crate) fn extend_corner(
    adjacency: &mut SortedAdjacency,
    p: usize,
    q: usize,
    left: usize,
    current: usize,
    mut right: usize,
) -> Result<(), LatticeError> {
    let spanning = p - 3;
    let branches = q
        .checked_sub(adjacency.degree(current))
        .ok_or(LatticeError::GrowthStalled { vertex: current })?;
    let mut count = (branches + (branches + 1) * spanning) as isize;

    // Corner already closed by the polygon opened from the previous vertex.
    if left == right + 2 {
        trace!(vertex = current, "corner already closed");
        return Ok(());
    }

    if branches == 0 {
        let mut steps = 0;
        while adjacency.degree(right) == q {
            count -= 1;
            right = adjacency
                .neighbors(right)
                .first()
                .copied()
                .ok_or(LatticeError::GrowthStalled { vertex: current })?;
            steps += 1;
            if steps > adjacency.len() {
                return Err(LatticeError::GrowthStalled { vertex: current });
            }
        }
    }

    if count < 1 {
        return Err(LatticeError::GrowthStalled { vertex: current });
    }
    let count = count as usize;

    let first = adjacency.push_vertices(count);
    let last = first + count - 1;
    for i in first..last {
        adjacency.connect(i, i + 1);
    }
    for offset in (spanning..count).step_by(spanning + 1) {
        adjacency.connect(current, first + offset);
    }
    adjacency.connect(left, first);
    adjacency.connect(right, last);

    trace!(vertex = current, left, right, added = count, "corner extended");
    Ok(())
}
