//! Terminal output utilities.

use super::Report;
use colored::Colorize;
use std::error::Error;

/// One result per line, no trailing newline.
pub fn render_lines(report: &Report) -> String {
    report.results.join("\n")
}

/// Format an error and its causes for stderr.
///
/// The `error` tag is coloured when the terminal supports it.
pub fn format_error(err: &dyn Error) -> String {
    let mut message = format!("{}: {err}", "error".red().bold());
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  {} {cause}", "caused by:".yellow()));
        source = cause.source();
    }
    message
}
