//! Driver configuration loaded from environment variables.
//!
//! Only ambient settings live here; tiling parameters come from the command
//! line.
//!
//! | Variable           | Default  | Description                                        |
//! |--------------------|----------|----------------------------------------------------|
//! | `CORONA_LOG_LEVEL` | `info`   | tracing filter (trace/debug/info/warn/error)       |
//! | `CORONA_OUTPUT`    | `points` | stdout format: points, csv, edges, jsonl, summary  |

use std::fmt;
use std::str::FromStr;

/// What the driver writes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `x y` per vertex.
    #[default]
    Points,
    /// `index,ring,x,y,degree` with header.
    Csv,
    /// `from,to` with header.
    Edges,
    /// One JSON vertex record per line.
    Jsonl,
    /// One pretty-printed JSON summary.
    Summary,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "csv" => Ok(Self::Csv),
            "edges" => Ok(Self::Edges),
            "jsonl" => Ok(Self::Jsonl),
            "summary" => Ok(Self::Summary),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Points => "points",
            Self::Csv => "csv",
            Self::Edges => "edges",
            Self::Jsonl => "jsonl",
            Self::Summary => "summary",
        })
    }
}

/// Runtime configuration for the `corona` process.
#[derive(Debug)]
pub struct Config {
    /// Tracing filter string, e.g. `"corona_lattice=debug,info"`.
    pub log_level: String,

    /// Format of the data written to stdout.
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env_str("CORONA_LOG_LEVEL", "info"),
            output: env_parse("CORONA_OUTPUT", OutputFormat::Points),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
