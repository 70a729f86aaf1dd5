//! Positional command-line arguments.
//!
//! ```text
//! corona                          # {3,7}, 5 rings
//! corona <p> <q> <rings> [side_length]
//! corona --help
//! ```

use anyhow::{bail, Context};

pub const USAGE: &str = "Usage: corona [<p> <q> <rings> [side_length]]\n\
    \n\
    Builds the {p,q} lattice grown <rings> coronas out from a seed vertex and\n\
    writes its embedding to stdout. Without arguments builds {3,7} with 5 rings.\n\
    \n\
    Environment:\n\
    \x20 CORONA_LOG_LEVEL  tracing filter (default: info)\n\
    \x20 CORONA_OUTPUT     points | csv | edges | jsonl | summary (default: points)";

/// Tiling to build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingArgs {
    pub p: usize,
    pub q: usize,
    pub rings: usize,
    /// Edge length for flat tilings; hyperbolic tilings derive their own.
    pub side_length: Option<f64>,
}

impl Default for TilingArgs {
    fn default() -> Self {
        Self { p: 3, q: 7, rings: 5, side_length: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Run(TilingArgs),
    Help,
}

/// Parse everything after the program name.
pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Command::Help);
    }
    match args {
        [] => Ok(Command::Run(TilingArgs::default())),
        [p, q, rings, rest @ ..] if rest.len() <= 1 => {
            let side_length = rest
                .first()
                .map(|s| s.parse::<f64>().with_context(|| format!("invalid side_length '{s}'")))
                .transpose()?;
            Ok(Command::Run(TilingArgs {
                p: parse_count("p", p)?,
                q: parse_count("q", q)?,
                rings: parse_count("rings", rings)?,
                side_length,
            }))
        }
        _ => bail!("expected 3 or 4 arguments, got {}\n\n{USAGE}", args.len()),
    }
}

fn parse_count(name: &str, value: &str) -> anyhow::Result<usize> {
    value
        .parse()
        .with_context(|| format!("invalid {name} '{value}': expected a non-negative integer"))
}
