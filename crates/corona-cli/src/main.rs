//! `corona`: build a {p,q} lattice and print its embedding.
//!
//! ## Quick start
//!
//! ```bash
//! # {3,7} heptagonal lattice, 5 rings, one "x y" line per vertex
//! cargo run --bin corona --release
//!
//! # Square grid, 3 rings, side 2, as CSV with debug logging on stderr
//! CORONA_OUTPUT=csv CORONA_LOG_LEVEL=debug cargo run --bin corona -- 4 4 3 2.0
//! ```

mod args;
mod config;
mod output;

use std::io::{BufWriter, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use corona_lattice::build_geometry_for_tiling;

use crate::args::{parse_args, Command, USAGE};
use crate::config::Config;
use crate::output::write_output;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let tiling = match parse_args(&argv)? {
        Command::Help => {
            eprintln!("{USAGE}");
            return Ok(());
        }
        Command::Run(tiling) => tiling,
    };

    info!(
        p = tiling.p,
        q = tiling.q,
        rings = tiling.rings,
        output = %config.output,
        "building lattice"
    );

    let lattice = build_geometry_for_tiling(tiling.p, tiling.q, tiling.rings, tiling.side_length)
        .with_context(|| format!("failed to build the {{{},{}}} lattice with {} rings", tiling.p, tiling.q, tiling.rings))?;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let written = write_output(config.output, &lattice, &mut writer).context("failed to write output")?;
    writer.flush().context("failed to flush stdout")?;

    info!(records = written, "done");
    Ok(())
}
