use corona_hyp_ops::{Curvature, HypError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    #[error("invalid tiling {{{p},{q}}}: p and q must both be at least 3")]
    InvalidParameter { p: usize, q: usize },

    #[error("tiling {{{p},{q}}} is spherical: ring growth past the first corona is undefined (requested {rings} rings)")]
    ClosedSurface { p: usize, q: usize, rings: usize },

    #[error("ring growth stalled at vertex {vertex}")]
    GrowthStalled { vertex: usize },

    #[error("vertex {vertex} has {same_ring} same-ring neighbors, expected 2")]
    MalformedRing { vertex: usize, same_ring: usize },

    #[error("periodic boundary needs a Euclidean tiling, {{{p},{q}}} is {curvature}")]
    UnsupportedPeriodicBoundary { p: usize, q: usize, curvature: Curvature },

    #[error("periodic closure incomplete: {deficient} vertices short of full degree after trimming {trimmed}")]
    IncompletePeriodicClosure { trimmed: usize, deficient: usize },

    #[error("perimeter split into {found} sides, expected {expected}")]
    PerimeterMismatch { expected: usize, found: usize },

    #[error("invalid edge length {length}")]
    InvalidEdgeLength { length: f64 },

    #[error("cannot embed a {curvature} tiling in the plane")]
    UnsupportedCurvature { curvature: Curvature },

    #[error("{graph} lattice cannot be embedded with {arithmetic} arithmetic")]
    CurvatureMismatch { graph: Curvature, arithmetic: Curvature },

    #[error("vertex {vertex} was never reached by placement")]
    UnplacedVertex { vertex: usize },

    #[error("geometry error: {0}")]
    Hyp(#[from] HypError),

    #[error("export error: {0}")]
    Export(String),
}

impl From<std::io::Error> for LatticeError {
    fn from(e: std::io::Error) -> Self {
        Self::Export(e.to_string())
    }
}

impl From<serde_json::Error> for LatticeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}
