//! Curvature dispatch and the one-call construction entry points.
//!
//! The arithmetic is picked once, from the graph's curvature, and the
//! resulting [`Embedding`] carries a monomorphised [`LatticeGeometry`].

use corona_hyp_ops::{poincare_side_length, Curvature, EuclideanPoint, GyroPoint, Point};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::LatticeError;
use crate::geometry::{LatticeGeometry, PlacementReport};
use crate::graph::LatticeGraph;

/// Default edge length for flat tilings.
pub const DEFAULT_EUCLIDEAN_SIDE: f64 = 1.0;

/// A lattice geometry in whichever plane its tiling lives.
#[derive(Debug, Clone)]
pub enum Embedding {
    Euclidean(LatticeGeometry<EuclideanPoint>),
    Hyperbolic(LatticeGeometry<GyroPoint>),
}

impl Embedding {
    /// Embed `graph`, choosing the arithmetic from its curvature.
    ///
    /// # Errors
    ///
    /// [`LatticeError::UnsupportedCurvature`] for spherical tilings, plus
    /// anything [`LatticeGeometry::build`] reports.
    pub fn build(graph: &LatticeGraph, edge_length: f64) -> Result<Self, LatticeError> {
        match graph.curvature() {
            Curvature::Euclidean => Ok(Self::Euclidean(LatticeGeometry::build(graph, edge_length)?)),
            Curvature::Hyperbolic => Ok(Self::Hyperbolic(LatticeGeometry::build(graph, edge_length)?)),
            curvature @ Curvature::Spherical => Err(LatticeError::UnsupportedCurvature { curvature }),
        }
    }

    pub fn curvature(&self) -> Curvature {
        match self {
            Self::Euclidean(_) => Curvature::Euclidean,
            Self::Hyperbolic(_) => Curvature::Hyperbolic,
        }
    }

    /// Raw `(x, y)` coordinates, indexed by vertex.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        match self {
            Self::Euclidean(g) => g.points().iter().map(Point::to_array).collect(),
            Self::Hyperbolic(g) => g.points().iter().map(Point::to_array).collect(),
        }
    }

    /// Distance between two vertices in the embedding's own metric.
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        match self {
            Self::Euclidean(g) => Some(g.point(a)?.distance(g.point(b)?)),
            Self::Hyperbolic(g) => Some(g.point(a)?.distance(g.point(b)?)),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Euclidean(g) => g.size(),
            Self::Hyperbolic(g) => g.size(),
        }
    }

    pub fn edge_length(&self) -> f64 {
        match self {
            Self::Euclidean(g) => g.edge_length(),
            Self::Hyperbolic(g) => g.edge_length(),
        }
    }

    pub fn report(&self) -> PlacementReport {
        match self {
            Self::Euclidean(g) => g.report(),
            Self::Hyperbolic(g) => g.report(),
        }
    }
}

// ─────────────────────────────────────────────
// Entry points
// ─────────────────────────────────────────────

/// A graph together with its embedding.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub graph: LatticeGraph,
    pub embedding: Embedding,
}

/// Summary of a built [`Lattice`], for logs and serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatticeSummary {
    pub p: usize,
    pub q: usize,
    pub rings: usize,
    pub curvature: Curvature,
    pub size: usize,
    pub edge_length: f64,
    pub ring_population: Vec<usize>,
    pub placement: PlacementReport,
}

impl Lattice {
    pub fn summary(&self) -> LatticeSummary {
        LatticeSummary {
            p: self.graph.p(),
            q: self.graph.q(),
            rings: self.graph.rings(),
            curvature: self.graph.curvature(),
            size: self.embedding.size(),
            edge_length: self.embedding.edge_length(),
            ring_population: self.graph.ring_population().to_vec(),
            placement: self.embedding.report(),
        }
    }
}

/// Build the adjacency structure of a {p,q} tiling.
pub fn build_graph(p: usize, q: usize, rings: usize, periodic: bool) -> Result<LatticeGraph, LatticeError> {
    LatticeGraph::build(p, q, rings, periodic)
}

/// Embed an existing graph.
pub fn build_geometry(graph: &LatticeGraph, edge_length: f64) -> Result<Embedding, LatticeError> {
    Embedding::build(graph, edge_length)
}

/// Build and embed an open {p,q} lattice in one call.
///
/// Hyperbolic tilings have a single admissible edge length, derived from
/// `(p, q)`; a supplied `side_length` is ignored for them. Flat tilings use
/// `side_length`, defaulting to [`DEFAULT_EUCLIDEAN_SIDE`].
pub fn build_geometry_for_tiling(
    p: usize,
    q: usize,
    rings: usize,
    side_length: Option<f64>,
) -> Result<Lattice, LatticeError> {
    let graph = LatticeGraph::build(p, q, rings, false)?;

    let edge_length = match graph.curvature() {
        Curvature::Hyperbolic => {
            let derived = poincare_side_length(p, q)?;
            if let Some(requested) = side_length {
                debug!(requested, derived, "hyperbolic side length is fixed by the tiling");
            }
            derived
        }
        _ => side_length.unwrap_or(DEFAULT_EUCLIDEAN_SIDE),
    };

    let embedding = Embedding::build(&graph, edge_length)?;
    info!(p, q, rings, edge_length, size = embedding.size(), "lattice geometry built");
    Ok(Lattice { graph, embedding })
}
