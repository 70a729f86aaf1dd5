//! `corona-lattice`: ring-grown {p,q} lattices and their planar embeddings.
//!
//! ## Crate structure
//!
//! | Module        | Responsibility                                                  |
//! |---------------|-----------------------------------------------------------------|
//! | [`adjacency`] | [`SortedAdjacency`]: strictly descending adjacency lists       |
//! | `growth`      | Corona-by-corona construction from a single seed                |
//! | `seam`        | Seam-corrected winding order of every vertex                    |
//! | [`periodic`]  | Torus stitching of flat patches, [`PeriodicClosure`]            |
//! | [`graph`]     | [`LatticeGraph`]: build protocol and queries                    |
//! | [`rotation`]  | [`rotation_map`]: counter-clockwise neighbor order              |
//! | [`geometry`]  | [`LatticeGeometry`]: placement sweep over any [`Point`] type    |
//! | [`embedding`] | [`Embedding`] curvature dispatch and one-call entry points      |
//! | [`tiling`]    | Polygons and segments for drawing                               |
//! | [`export`]    | Points, CSV and JSONL writers, [`LatticeSnapshot`]              |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use corona_lattice::build_geometry_for_tiling;
//!
//! let lattice = build_geometry_for_tiling(3, 7, 4, None)?;
//! println!("{} vertices, rings {:?}", lattice.embedding.size(), lattice.graph.ring_population());
//! ```
//!
//! [`Point`]: corona_hyp_ops::Point

pub mod adjacency;
pub mod embedding;
pub mod error;
pub mod export;
pub mod geometry;
pub mod graph;
mod growth;
pub mod periodic;
pub mod rotation;
mod seam;
pub mod tiling;

// ── Graph ─────────────────────────────────────────────────────────────────────
pub use adjacency::SortedAdjacency;
pub use graph::LatticeGraph;
pub use periodic::{perimeter_sides, PeriodicClosure};
pub use rotation::{rotation_map, split_into_ring_components, RingComponents};

// ── Geometry ──────────────────────────────────────────────────────────────────
pub use embedding::{
    build_geometry, build_geometry_for_tiling, build_graph, Embedding, Lattice, LatticeSummary,
    DEFAULT_EUCLIDEAN_SIDE,
};
pub use geometry::{LatticeGeometry, PlacementReport};

// ── Output ────────────────────────────────────────────────────────────────────
pub use export::{
    export_edges_csv, export_jsonl, export_points, export_vertices_csv, LatticeSnapshot,
    VertexRecord,
};
pub use tiling::{graph_segments, polygon_edges, polygon_tiling, Polygon, Segment};

pub use error::LatticeError;
