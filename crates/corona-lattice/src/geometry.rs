//! [`LatticeGeometry`]: positions for every vertex of a [`LatticeGraph`].
//!
//! ## Placement sweep
//!
//! 1. **Seed**: vertex 0 at the origin, vertex 1 at the guide vector
//!    `(edge_length, 0)`.
//! 2. **Sweep**: vertices `1..n` in index order. For each, read its
//!    [`rotation_map`], find the last neighbor that already has a position
//!    (the *stem*) and the direction towards it. Every unplaced neighbor at
//!    map position `i` goes to `here ⊕ rotate(guide, dir + (i − stem)·2π/q)`.
//! 3. **Check**: every vertex must have been placed. A vertex whose turn
//!    comes with no placed neighbor is counted as a stall; if a stall leaves
//!    something unplaced the build fails.
//!
//! Positions are assigned once and never revised. The same code runs for
//! both arithmetics through [`Point`].

use std::f64::consts::TAU;

use corona_hyp_ops::{Curvature, Point};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LatticeError;
use crate::graph::LatticeGraph;
use crate::rotation::rotation_map;

/// Counters from one placement sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    /// Vertices given a position (seeds included).
    pub placed: usize,
    /// Vertices whose turn came before any neighbor was placed.
    pub stalled: usize,
    /// Vertices that placed at least one neighbor.
    pub connected: usize,
}

/// Embedded lattice: one point per live vertex.
#[derive(Debug, Clone)]
pub struct LatticeGeometry<P: Point> {
    points: Vec<P>,
    guide: P,
    edge_length: f64,
    report: PlacementReport,
}

impl<P: Point> LatticeGeometry<P> {
    /// Embed `graph` with the given seed edge length.
    ///
    /// The edge length is a Euclidean length for [`corona_hyp_ops::EuclideanPoint`]
    /// and a Poincaré radius (so `< 1`) for [`corona_hyp_ops::GyroPoint`].
    pub fn build(graph: &LatticeGraph, edge_length: f64) -> Result<Self, LatticeError> {
        if !edge_length.is_finite()
            || edge_length <= 0.0
            || (P::CURVATURE == Curvature::Hyperbolic && edge_length >= 1.0)
        {
            return Err(LatticeError::InvalidEdgeLength { length: edge_length });
        }
        if graph.curvature() != P::CURVATURE {
            return Err(LatticeError::CurvatureMismatch {
                graph: graph.curvature(),
                arithmetic: P::CURVATURE,
            });
        }

        let guide = P::from_xy(edge_length, 0.0);
        let mut sweep = Sweep::new(graph, guide);
        sweep.run(graph)?;

        if let Some(vertex) = sweep.first_unplaced() {
            warn!(vertex, stalled = sweep.report.stalled, "placement sweep left vertices unplaced");
            return Err(LatticeError::UnplacedVertex { vertex });
        }
        if sweep.report.stalled > 0 {
            warn!(stalled = sweep.report.stalled, "placement sweep reached vertices before their neighbors");
        }

        let mut points = sweep.points;
        points.truncate(graph.size());
        debug!(
            placed = sweep.report.placed,
            connected = sweep.report.connected,
            size = points.len(),
            "lattice embedded"
        );

        Ok(Self { points, guide, edge_length, report: sweep.report })
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn point(&self, v: usize) -> Option<&P> {
        self.points.get(v)
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Seed offset from vertex 0 to vertex 1.
    pub fn guide(&self) -> P {
        self.guide
    }

    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    pub fn report(&self) -> PlacementReport {
        self.report
    }
}

/// Transient state of one placement sweep.
struct Sweep<P: Point> {
    points: Vec<P>,
    valid: Vec<bool>,
    guide: P,
    dt: f64,
    report: PlacementReport,
}

impl<P: Point> Sweep<P> {
    fn new(graph: &LatticeGraph, guide: P) -> Self {
        let total = graph.vertex_count();
        Self {
            points: vec![P::origin(); total],
            valid: vec![false; total],
            guide,
            dt: TAU / graph.q() as f64,
            report: PlacementReport::default(),
        }
    }

    /// Seed vertices 0 and 1, then connect every vertex in index order.
    fn run(&mut self, graph: &LatticeGraph) -> Result<(), LatticeError> {
        let total = self.points.len();
        self.place(0, P::origin());
        if total > 1 {
            self.place(1, self.guide);
        }
        for v in 1..total {
            self.connect(graph, v)?;
        }
        Ok(())
    }

    fn first_unplaced(&self) -> Option<usize> {
        self.valid.iter().position(|&ok| !ok)
    }

    fn place(&mut self, v: usize, at: P) {
        debug_assert!(!self.valid[v], "vertex {v} placed twice");
        self.points[v] = at;
        self.valid[v] = true;
        self.report.placed += 1;
    }

    /// Place every unplaced neighbor of `v` around it.
    fn connect(&mut self, graph: &LatticeGraph, v: usize) -> Result<(), LatticeError> {
        let map = rotation_map(graph, v)?;

        let mut stem = None;
        let mut placed = 0;
        for (i, &k) in map.iter().enumerate() {
            if self.valid[k] {
                stem = Some(i);
                placed += 1;
            }
        }

        let Some(stem) = stem.filter(|_| self.valid[v]) else {
            self.report.stalled += 1;
            debug!(vertex = v, "no placed neighbor at its turn");
            return Ok(());
        };
        if placed == map.len() {
            return Ok(());
        }

        let here = self.points[v];
        let dir = here.relative(&self.points[map[stem]]).phase();
        let between = self.guide.rotate(dir);

        for (i, &k) in map.iter().enumerate() {
            if !self.valid[k] {
                let turn = (i as f64 - stem as f64) * self.dt;
                self.place(k, here.add(&between.rotate(turn)));
            }
        }
        self.report.connected += 1;
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use corona_hyp_ops::{poincare_side_length, EuclideanPoint, GyroPoint};

    fn assert_at(p: &impl Point, x: f64, y: f64) {
        assert!(
            (p.x() - x).abs() < 1e-9 && (p.y() - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            p.x(),
            p.y()
        );
    }

    #[test]
    fn square_lattice_lands_on_integer_grid() {
        let g = LatticeGraph::build(4, 4, 2, false).unwrap();
        let geo = LatticeGeometry::<EuclideanPoint>::build(&g, 1.0).unwrap();
        let expected = [
            (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0), (-1.0, -1.0),
            (-1.0, 0.0), (-1.0, 1.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0),
            (2.0, 0.0), (2.0, -1.0), (2.0, -2.0), (1.0, -2.0), (0.0, -2.0),
            (-1.0, -2.0), (-2.0, -2.0), (-2.0, -1.0), (-2.0, 0.0), (-2.0, 1.0),
            (-2.0, 2.0), (-1.0, 2.0), (0.0, 2.0), (1.0, 2.0), (2.0, 2.0),
        ];
        assert_eq!(geo.size(), expected.len());
        for (v, &(x, y)) in expected.iter().enumerate() {
            assert_at(&geo.points()[v], x, y);
        }
        assert_eq!(geo.report().stalled, 0);
        assert_eq!(geo.report().placed, 25);
    }

    #[test]
    fn triangular_first_ring_is_a_hexagon() {
        let g = LatticeGraph::build(3, 6, 1, false).unwrap();
        let geo = LatticeGeometry::<EuclideanPoint>::build(&g, 1.0).unwrap();
        let h = 3f64.sqrt() / 2.0;
        let expected = [
            (0.0, 0.0), (1.0, 0.0), (0.5, -h), (-0.5, -h), (-1.0, 0.0), (-0.5, h), (0.5, h),
        ];
        for (v, &(x, y)) in expected.iter().enumerate() {
            assert_at(&geo.points()[v], x, y);
        }
    }

    #[test]
    fn hyperbolic_second_ring_positions() {
        let g = LatticeGraph::build(3, 7, 2, false).unwrap();
        let l = poincare_side_length(3, 7).unwrap();
        let geo = LatticeGeometry::<GyroPoint>::build(&g, l).unwrap();
        let pts = geo.points();
        assert_at(&pts[0], 0.0, 0.0);
        assert_at(&pts[1], l, 0.0);
        assert_at(&pts[2], 0.309_855_992_059, -0.388_547_124_429);
        assert_at(&pts[7], 0.309_855_992_059, 0.388_547_124_429);
        assert_at(&pts[8], 0.647_024_550_401, 0.311_590_601_218);
        assert!((pts[2].magnitude() - pts[0].distance(&pts[7])).abs() < 1e-12);
    }

    #[test]
    fn seed_placement() {
        let g = LatticeGraph::build(4, 4, 1, false).unwrap();
        let geo = LatticeGeometry::<EuclideanPoint>::build(&g, 2.5).unwrap();
        assert_at(&geo.points()[0], 0.0, 0.0);
        assert_at(&geo.points()[1], 2.5, 0.0);
        assert_eq!(geo.guide(), EuclideanPoint::from_xy(2.5, 0.0));
    }

    #[test]
    fn lone_seed_embeds_at_origin() {
        let g = LatticeGraph::build(4, 4, 0, false).unwrap();
        let geo = LatticeGeometry::<EuclideanPoint>::build(&g, 1.0).unwrap();
        assert_eq!(geo.points(), &[EuclideanPoint::origin()]);
    }

    #[test]
    fn rejects_bad_edge_lengths() {
        let g = LatticeGraph::build(3, 7, 1, false).unwrap();
        for bad in [0.0, -0.3, f64::NAN, 1.0, 1.5] {
            assert!(matches!(
                LatticeGeometry::<GyroPoint>::build(&g, bad),
                Err(LatticeError::InvalidEdgeLength { .. })
            ));
        }
        let flat = LatticeGraph::build(4, 4, 1, false).unwrap();
        assert!(LatticeGeometry::<EuclideanPoint>::build(&flat, 3.0).is_ok());
    }

    #[test]
    fn rejects_mismatched_arithmetic() {
        let g = LatticeGraph::build(3, 7, 1, false).unwrap();
        assert_eq!(
            LatticeGeometry::<EuclideanPoint>::build(&g, 0.4).unwrap_err(),
            LatticeError::CurvatureMismatch {
                graph: Curvature::Hyperbolic,
                arithmetic: Curvature::Euclidean,
            }
        );
    }

    /// Seed, a triangle `1..=3` and a square `4..=7` that hangs off vertex 3
    /// through vertex 6, so 4 and 5 come up before any neighbor is placed.
    fn late_bridge() -> LatticeGraph {
        LatticeGraph::from_edges(
            4,
            4,
            &[1, 3, 4],
            &[(0, 1), (1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 7), (7, 4), (3, 6)],
        )
    }

    #[test]
    fn stalled_vertices_are_counted_and_placed_later() {
        let geo = LatticeGeometry::<EuclideanPoint>::build(&late_bridge(), 1.0).unwrap();
        let report = geo.report();
        assert_eq!(report.stalled, 2);
        assert_eq!(report.placed, 8);
        assert_eq!(report.connected, 4);
        assert!(geo.points().iter().all(|p| p.x().is_finite() && p.y().is_finite()));
    }

    #[test]
    fn unreachable_component_is_an_error() {
        // Square 4..=6 shares no edge with the rest.
        let g = LatticeGraph::from_edges(
            4,
            4,
            &[1, 3, 3],
            &[(0, 1), (1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
        );
        assert_eq!(
            LatticeGeometry::<EuclideanPoint>::build(&g, 1.0).unwrap_err(),
            LatticeError::UnplacedVertex { vertex: 4 }
        );

        let mut sweep = Sweep::new(&g, EuclideanPoint::from_xy(1.0, 0.0));
        sweep.run(&g).unwrap();
        assert_eq!(sweep.report.stalled, 3);
        assert_eq!(sweep.report.placed, 4);
        assert_eq!(sweep.first_unplaced(), Some(4));
    }

    #[test]
    fn periodic_geometry_keeps_live_vertices_only() {
        let g = LatticeGraph::build(4, 4, 2, true).unwrap();
        let geo = LatticeGeometry::<EuclideanPoint>::build(&g, 1.0).unwrap();
        assert_eq!(geo.size(), 16);
        assert_at(&geo.points()[15], -1.0, -2.0);
    }
}
