//! MCP tool implementations.
//!
//! This module contains the implementations for the MCP tools exposed by
//! the server. Both tools are pure computation; the server layer only
//! wraps them in protocol plumbing.

use crate::models::{AnalysisResponse, AnalyzeParams, PingResponse};
use sluice::analysis;
use sluice::domain::{Edge, Node};

/// Tool implementations for the sluice MCP server.
///
/// Stateless: every call builds and discards its own structures, so a
/// single instance may serve concurrent calls without coordination.
#[derive(Debug, Default)]
pub struct Tools;

impl Tools {
    /// Create a new Tools instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Liveness probe.
    #[must_use]
    pub fn ping(&self) -> PingResponse {
        PingResponse::pong()
    }

    /// Analyze a submitted pipeline.
    ///
    /// Counts are literal (duplicates kept as listed) and the DAG
    /// verdict covers every identifier appearing in the node list or as
    /// an edge endpoint. Total over any well-shaped input, including
    /// empty node and edge lists.
    #[must_use]
    pub fn analyze(&self, params: AnalyzeParams) -> AnalysisResponse {
        let nodes: Vec<Node> = params.nodes.into_iter().map(Into::into).collect();
        let edges: Vec<Edge> = params.edges.into_iter().map(Into::into).collect();

        let result = analysis::analyze(&nodes, &edges);
        tracing::debug!(
            num_nodes = result.num_nodes,
            num_edges = result.num_edges,
            is_dag = result.is_dag,
            "Analyzed pipeline"
        );

        result.into()
    }
}
