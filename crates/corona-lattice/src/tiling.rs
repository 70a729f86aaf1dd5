//! Polygon and edge extraction for drawing an embedded lattice.
//!
//! Each vertex is drawn as a regular p-gon centred on it, corners at the
//! tiling's transversal length, turned so that it lines up with the
//! vertex's lead neighbor (see [`LatticeGraph::lead_neighbor`]).

use std::f64::consts::{PI, TAU};

use corona_hyp_ops::{
    euclidean_transversal_length, hyperbolic_to_poincare, hyperbolic_transversal_length, Point,
};

use crate::embedding::Embedding;
use crate::error::LatticeError;
use crate::geometry::LatticeGeometry;
use crate::graph::LatticeGraph;

/// Corners of one polygon, counter-clockwise.
pub type Polygon = Vec<[f64; 2]>;

/// A drawable segment.
pub type Segment = ([f64; 2], [f64; 2]);

/// Corners closer than this are treated as the same point.
const CORNER_EPS: f64 = 1e-9;

/// One p-gon per live vertex of the lattice.
pub fn polygon_tiling(graph: &LatticeGraph, embedding: &Embedding) -> Result<Vec<Polygon>, LatticeError> {
    let (p, q) = (graph.p(), graph.q());
    match embedding {
        Embedding::Euclidean(geometry) => {
            let base = geometry.edge_length() * euclidean_transversal_length(p, q)?;
            Ok(polygons(graph, geometry, base))
        }
        Embedding::Hyperbolic(geometry) => {
            let base = hyperbolic_to_poincare(hyperbolic_transversal_length(p, q)?);
            Ok(polygons(graph, geometry, base))
        }
    }
}

fn polygons<P: Point>(graph: &LatticeGraph, geometry: &LatticeGeometry<P>, base_length: f64) -> Vec<Polygon> {
    let p = graph.p();
    let dt = TAU / p as f64;
    let base = P::from_xy(base_length, 0.0).rotate(PI / p as f64);
    let points = geometry.points();

    if points.len() == 1 {
        return vec![(0..p).map(|k| base.rotate(k as f64 * dt).to_array()).collect()];
    }

    points
        .iter()
        .enumerate()
        .map(|(v, current)| {
            let direction = anchor(graph, v, points.len())
                .map(|n| current.relative(&points[n]).phase())
                .unwrap_or(0.0);
            let offset = base.rotate(direction);
            (0..p)
                .map(|k| current.add(&offset.rotate(k as f64 * dt)).to_array())
                .collect()
        })
        .collect()
}

/// Lead neighbor of `v`, or its highest live open-patch neighbor when
/// periodic trimming removed the lead.
fn anchor(graph: &LatticeGraph, v: usize, live: usize) -> Option<usize> {
    match graph.lead_neighbor(v) {
        Some(n) if n < live => Some(n),
        _ => graph.winding(v).iter().copied().filter(|&n| n < live).max(),
    }
}

/// Distinct polygon sides. A side and its reverse count once.
pub fn polygon_edges(polygons: &[Polygon]) -> Vec<Segment> {
    let mut edges: Vec<Segment> = Vec::new();
    for polygon in polygons {
        let n = polygon.len();
        for j in 0..n {
            let side = (polygon[j], polygon[(j + 1) % n]);
            if !edges.iter().any(|e| same_segment(e, &side)) {
                edges.push(side);
            }
        }
    }
    edges
}

/// Graph edges as coordinate pairs, for live vertices.
pub fn graph_segments(graph: &LatticeGraph, embedding: &Embedding) -> Vec<Segment> {
    let coords = embedding.coordinates();
    graph
        .edges()
        .into_iter()
        .filter(|&(a, b)| a < coords.len() && b < coords.len())
        .map(|(a, b)| (coords[a], coords[b]))
        .collect()
}

fn same_corner(a: &[f64; 2], b: &[f64; 2]) -> bool {
    (a[0] - b[0]).abs() < CORNER_EPS && (a[1] - b[1]).abs() < CORNER_EPS
}

fn same_segment(a: &Segment, b: &Segment) -> bool {
    (same_corner(&a.0, &b.0) && same_corner(&a.1, &b.1))
        || (same_corner(&a.0, &b.1) && same_corner(&a.1, &b.0))
}
