//! Writes a built lattice to stdout in the configured format.

use std::io::Write;

use corona_lattice::{
    export_edges_csv, export_jsonl, export_points, export_vertices_csv, Lattice, LatticeError,
};

use crate::config::OutputFormat;

/// Write `lattice` as `format`; returns the number of records written.
pub fn write_output<W: Write>(
    format: OutputFormat,
    lattice: &Lattice,
    writer: &mut W,
) -> Result<usize, LatticeError> {
    let Lattice { graph, embedding } = lattice;
    match format {
        OutputFormat::Points => export_points(embedding, writer),
        OutputFormat::Csv => export_vertices_csv(graph, embedding, writer),
        OutputFormat::Edges => export_edges_csv(graph, writer),
        OutputFormat::Jsonl => export_jsonl(graph, embedding, writer),
        OutputFormat::Summary => {
            serde_json::to_writer_pretty(&mut *writer, &lattice.summary())?;
            writeln!(writer)?;
            Ok(1)
        }
    }
}
