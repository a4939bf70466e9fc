//! Output formatting for CLI results.
//!
//! This module renders a [`PipelineAnalysis`] either as a short
//! human-readable summary with a colored verdict line, or as the JSON
//! record `{"num_nodes": N, "num_edges": M, "is_dag": B}` for
//! programmatic use. `colored` honors `NO_COLOR` on its own.

use crate::domain::PipelineAnalysis;
use crate::error::Result;
use colored::Colorize;

/// Render the human-readable summary of an analysis.
#[must_use]
pub fn render_analysis(analysis: &PipelineAnalysis) -> String {
    let verdict = if analysis.is_dag {
        "acyclic (DAG)".green().bold().to_string()
    } else {
        "contains a cycle".red().bold().to_string()
    };

    format!(
        "nodes: {}\nedges: {}\nverdict: {verdict}",
        analysis.num_nodes, analysis.num_edges
    )
}

/// Serialize an analysis to its JSON wire form.
///
/// # Errors
///
/// Returns an error if serialization fails, which cannot happen for
/// this record shape; the `Result` keeps the caller's `?` flow uniform.
pub fn render_analysis_json(analysis: &PipelineAnalysis) -> Result<String> {
    Ok(serde_json::to_string(analysis)?)
}
