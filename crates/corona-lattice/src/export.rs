//! Export: plain-text points, CSV and JSONL for vertices and edges.

use std::io::Write;

use corona_hyp_ops::Curvature;
use serde::{Deserialize, Serialize};

use crate::embedding::Embedding;
use crate::error::LatticeError;
use crate::graph::LatticeGraph;

/// One embedded vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub index: usize,
    pub ring: usize,
    pub x: f64,
    pub y: f64,
    pub neighbors: Vec<usize>,
}

/// Full serializable picture of an embedded lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeSnapshot {
    pub p: usize,
    pub q: usize,
    pub rings: usize,
    pub curvature: Curvature,
    pub size: usize,
    pub ring_population: Vec<usize>,
    pub vertices: Vec<VertexRecord>,
}

impl LatticeSnapshot {
    pub fn capture(graph: &LatticeGraph, embedding: &Embedding) -> Self {
        Self {
            p: graph.p(),
            q: graph.q(),
            rings: graph.rings(),
            curvature: graph.curvature(),
            size: embedding.size(),
            ring_population: graph.ring_population().to_vec(),
            vertices: vertex_records(graph, embedding),
        }
    }
}

fn vertex_records(graph: &LatticeGraph, embedding: &Embedding) -> Vec<VertexRecord> {
    embedding
        .coordinates()
        .into_iter()
        .enumerate()
        .map(|(index, [x, y])| VertexRecord {
            index,
            ring: graph.ring_of(index).unwrap_or(0),
            x,
            y,
            neighbors: graph.neighbors(index).to_vec(),
        })
        .collect()
}

// ── Export ───────────────────────────────────────────────────────────────────

/// One `x y` line per vertex.
pub fn export_points<W: Write>(embedding: &Embedding, writer: &mut W) -> Result<usize, LatticeError> {
    let coords = embedding.coordinates();
    for [x, y] in &coords {
        writeln!(writer, "{x} {y}")?;
    }
    Ok(coords.len())
}

/// Vertices as CSV (header + data).
///
/// Columns: `index,ring,x,y,degree`
pub fn export_vertices_csv<W: Write>(
    graph: &LatticeGraph,
    embedding: &Embedding,
    writer: &mut W,
) -> Result<usize, LatticeError> {
    writeln!(writer, "index,ring,x,y,degree")?;
    let records = vertex_records(graph, embedding);
    for r in &records {
        writeln!(writer, "{},{},{},{},{}", r.index, r.ring, r.x, r.y, r.neighbors.len())?;
    }
    Ok(records.len())
}

/// Undirected edges as CSV (header + data).
///
/// Columns: `from,to`
pub fn export_edges_csv<W: Write>(graph: &LatticeGraph, writer: &mut W) -> Result<usize, LatticeError> {
    writeln!(writer, "from,to")?;
    let edges = graph.edges();
    for (a, b) in &edges {
        writeln!(writer, "{a},{b}")?;
    }
    Ok(edges.len())
}

/// Vertices as JSONL (one [`VertexRecord`] per line).
pub fn export_jsonl<W: Write>(
    graph: &LatticeGraph,
    embedding: &Embedding,
    writer: &mut W,
) -> Result<usize, LatticeError> {
    let records = vertex_records(graph, embedding);
    for r in &records {
        serde_json::to_writer(&mut *writer, r)?;
        writeln!(writer)?;
    }
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::build_geometry_for_tiling;

    fn square() -> (LatticeGraph, Embedding) {
        let lattice = build_geometry_for_tiling(4, 4, 1, None).unwrap();
        (lattice.graph, lattice.embedding)
    }

    #[test]
    fn points_are_space_separated() {
        let (_, embedding) = square();
        let mut buf = Vec::new();
        assert_eq!(export_points(&embedding, &mut buf).unwrap(), 9);
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("0 0"));
        assert_eq!(lines.next(), Some("1 0"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn vertices_csv_has_header_and_degrees() {
        let (graph, embedding) = square();
        let mut buf = Vec::new();
        export_vertices_csv(&graph, &embedding, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,ring,x,y,degree");
        assert_eq!(lines[1], "0,0,0,0,4");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn edges_csv_lists_each_edge_once() {
        let (graph, _) = square();
        let mut buf = Vec::new();
        assert_eq!(export_edges_csv(&graph, &mut buf).unwrap(), 12);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("0,7"));
    }

    #[test]
    fn jsonl_lines_parse_back() {
        let (graph, embedding) = square();
        let mut buf = Vec::new();
        export_jsonl(&graph, &embedding, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let records: Vec<VertexRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 9);
        assert_eq!(records[0].neighbors, vec![7, 5, 3, 1]);
        assert_eq!(records[8].ring, 1);
    }

    #[test]
    fn snapshot_serializes_curvature_lowercase() {
        let (graph, embedding) = square();
        let snap = LatticeSnapshot::capture(&graph, &embedding);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["curvature"], "euclidean");
        assert_eq!(json["ring_population"], serde_json::json!([1, 8]));
        assert_eq!(snap.vertices.len(), 9);
    }

    #[test]
    fn write_failure_maps_to_export_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let (graph, _) = square();
        let err = export_edges_csv(&graph, &mut Broken).unwrap_err();
        assert!(matches!(err, LatticeError::Export(msg) if msg.contains("disk gone")));
    }
}
