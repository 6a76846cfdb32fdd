//! Output formatting for command results.
//!
//! This module handles printing results:
//! - [`json`] - JSON report
//! - [`terminal`] - plain lines and coloured errors

mod json;
mod terminal;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use json::render_json;
pub use terminal::{format_error, render_lines};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Lines,
    /// A single pretty-printed JSON [`Report`].
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "text" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Result of one command, ready to print.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Command that produced the results.
    pub command: &'static str,
    /// Arguments as given.
    pub inputs: Vec<String>,
    /// CIDR blocks or PTR names, in output order.
    pub results: Vec<String>,
}

impl Report {
    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Lines => Ok(render_lines(self)),
            OutputFormat::Json => render_json(self),
        }
    }
}
