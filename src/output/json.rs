//! JSON output.

use super::Report;

/// Pretty-printed JSON for a [`Report`].
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
