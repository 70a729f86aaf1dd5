//! [`LatticeGraph`]: the combinatorial {p,q} lattice.
//!
//! ## Build protocol
//!
//! 1. **Validate**: `p, q ≥ 3`; spherical tilings stop at the first corona.
//! 2. **Grow**: ring-by-ring adjacency, see `growth`.
//! 3. **Ring map**: corona index of every vertex from the populations.
//! 4. **Wind**: seam-corrected neighbor order and polygon lead neighbors,
//!    see `seam`. Computed on the open patch so that a periodic graph
//!    embeds as its fundamental domain.
//! 5. **Stitch** *(optional)*: periodic boundary, flat tilings only, see
//!    [`crate::periodic`].

use corona_hyp_ops::Curvature;
use serde::Serialize;
use tracing::{info, warn};

use crate::adjacency::SortedAdjacency;
use crate::error::LatticeError;
use crate::growth::populate;
use crate::periodic::{stitch, PeriodicClosure};
use crate::seam::{lead_neighbors, wind};

// ─────────────────────────────────────────────
// LatticeGraph
// ─────────────────────────────────────────────

/// Adjacency structure of a {p,q} tiling grown `rings` coronas out from a
/// seed vertex. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct LatticeGraph {
    p: usize,
    q: usize,
    rings: usize,
    adjacency: SortedAdjacency,
    winding: Vec<Vec<usize>>,
    lead: Vec<Option<usize>>,
    ring_population: Vec<usize>,
    ring_start: Vec<usize>,
    ring_map: Vec<usize>,
    closure: Option<PeriodicClosure>,
    trimmed: usize,
}

impl LatticeGraph {
    /// Build the lattice, optionally with a periodic boundary.
    ///
    /// A periodic boundary on a curved tiling is skipped with a warning and
    /// [`periodic_closure`](Self::periodic_closure) stays `None`; use
    /// [`require_periodic`](Self::require_periodic) to make that an error.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InvalidParameter`] if `p < 3` or `q < 3`.
    /// - [`LatticeError::ClosedSurface`] for a spherical tiling with
    ///   `rings ≥ 2`.
    /// - [`LatticeError::GrowthStalled`] if a corona cannot be closed.
    pub fn build(p: usize, q: usize, rings: usize, periodic: bool) -> Result<Self, LatticeError> {
        if p < 3 || q < 3 {
            return Err(LatticeError::InvalidParameter { p, q });
        }
        let curvature = Curvature::of(p, q);
        if !curvature.is_open() && rings >= 2 {
            return Err(LatticeError::ClosedSurface { p, q, rings });
        }

        let grown = populate(p, q, rings)?;
        let ring_population = grown.ring_population;
        let mut adjacency = grown.adjacency;

        let (ring_start, ring_map) = ring_index(&ring_population);

        let winding = wind(&adjacency, &ring_map, &ring_start, &ring_population);
        let lead = lead_neighbors(&adjacency, &ring_start, &ring_population);

        let closure = if !periodic {
            None
        } else if curvature != Curvature::Euclidean {
            warn!(p, q, %curvature, "periodic boundary requested on a curved tiling, ignoring");
            None
        } else if rings == 0 {
            warn!(p, q, "periodic boundary requested on a lone seed, ignoring");
            None
        } else {
            let outer = ring_population.last().copied().unwrap_or(0);
            Some(stitch(&mut adjacency, p, q, outer)?)
        };
        let trimmed = closure.map_or(0, |c| c.trimmed);

        let graph = Self {
            p,
            q,
            rings,
            adjacency,
            winding,
            lead,
            ring_population,
            ring_start,
            ring_map,
            closure,
            trimmed,
        };

        info!(
            p,
            q,
            rings,
            %curvature,
            vertices = graph.vertex_count(),
            size = graph.size(),
            edges = graph.adjacency.edge_count(),
            periodic = graph.closure.is_some(),
            "lattice graph built"
        );
        Ok(graph)
    }

    // ── Parameters ─────────────────────────────────────

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn rings(&self) -> usize {
        self.rings
    }

    pub fn curvature(&self) -> Curvature {
        Curvature::of(self.p, self.q)
    }

    /// `+1` spherical, `0` Euclidean, `−1` hyperbolic.
    pub fn curvature_sign(&self) -> i32 {
        self.curvature().sign()
    }

    // ── Adjacency ──────────────────────────────────────

    /// All adjacency lists, each strictly descending. Includes vertices
    /// isolated by periodic trimming (empty lists).
    pub fn vertices(&self) -> &[Vec<usize>] {
        self.adjacency.lists()
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.neighbors(v)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.degree(v)
    }

    /// Neighbors of `v` in the open patch, in seam-corrected angular group
    /// order. Unaffected by periodic stitching.
    pub fn winding(&self, v: usize) -> &[usize] {
        self.winding.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Open-patch neighbor a drawn polygon of `v` is turned towards. `None`
    /// for a lone seed.
    pub fn lead_neighbor(&self, v: usize) -> Option<usize> {
        self.lead.get(v).copied().flatten()
    }

    /// Every undirected edge once, as `(low, high)`, ordered by `low` and
    /// then by descending `high`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.adjacency.edge_count());
        for (v, list) in self.adjacency.lists().iter().enumerate() {
            edges.extend(list.iter().filter(|&&n| n > v).map(|&n| (v, n)));
        }
        edges
    }

    /// True iff every vertex has degree `q` or 0.
    pub fn is_complete(&self) -> bool {
        self.adjacency.is_regular(self.q)
    }

    // ── Rings ──────────────────────────────────────────

    /// Vertices created per corona; corona 0 is the seed.
    pub fn ring_population(&self) -> &[usize] {
        &self.ring_population
    }

    /// Corona index of every vertex.
    pub fn ring_map(&self) -> &[usize] {
        &self.ring_map
    }

    pub fn ring_of(&self, v: usize) -> Option<usize> {
        self.ring_map.get(v).copied()
    }

    /// Index range of corona `ring`.
    pub fn ring_range(&self, ring: usize) -> Option<std::ops::Range<usize>> {
        let start = *self.ring_start.get(ring)?;
        Some(start..start + self.ring_population[ring])
    }

    // ── Size ───────────────────────────────────────────

    /// Every vertex ever created, trimmed ones included.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Live vertices. Trimming removes the highest indices, so the live
    /// vertices are exactly `0..size()`.
    ///
    /// The seed is always counted. A stitched `{3,6}` lattice with one
    /// corona trims its whole perimeter and leaves the seed with no
    /// neighbors, yet `size()` is still 1.
    pub fn size(&self) -> usize {
        self.vertex_count() - self.trimmed
    }

    // ── Periodic boundary ──────────────────────────────

    pub fn periodic_closure(&self) -> Option<&PeriodicClosure> {
        self.closure.as_ref()
    }

    /// The periodic closure, or an error if the graph is not periodic or the
    /// closure is incomplete.
    pub fn require_periodic(&self) -> Result<&PeriodicClosure, LatticeError> {
        let closure = self
            .closure
            .as_ref()
            .ok_or(LatticeError::UnsupportedPeriodicBoundary {
                p: self.p,
                q: self.q,
                curvature: self.curvature(),
            })?;
        closure.ensure_complete()?;
        Ok(closure)
    }
}

/// First vertex of every corona and the corona of every vertex.
fn ring_index(ring_population: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut ring_start = Vec::with_capacity(ring_population.len());
    let mut ring_map = Vec::with_capacity(ring_population.iter().sum());
    for (ring, &count) in ring_population.iter().enumerate() {
        ring_start.push(ring_map.len());
        ring_map.extend(std::iter::repeat(ring).take(count));
    }
    (ring_start, ring_map)
}

#[cfg(test)]
impl LatticeGraph {
    /// Graph over hand-written edges, wound in plain descending order.
    /// Lets placement run on shapes growth never produces.
    pub(crate) fn from_edges(p: usize, q: usize, ring_population: &[usize], edges: &[(usize, usize)]) -> Self {
        let (ring_start, ring_map) = ring_index(ring_population);
        let mut adjacency = SortedAdjacency::with_vertices(ring_map.len());
        for &(a, b) in edges {
            adjacency.connect(a, b);
        }
        let winding = adjacency.lists().to_vec();
        let lead = winding.iter().map(|list| list.first().copied()).collect();
        Self {
            p,
            q,
            rings: ring_population.len().saturating_sub(1),
            adjacency,
            winding,
            lead,
            ring_population: ring_population.to_vec(),
            ring_start,
            ring_map,
            closure: None,
            trimmed: 0,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
