//! MCP parameter and response models.
//!
//! These types define the wire shapes for MCP tools. Parameter structs
//! carry JSON schemas via `schemars` so clients see the required
//! `id`/`source`/`target` fields up front; extra fields on node and
//! edge objects (positions, labels, UI state) are accepted and ignored,
//! while missing required fields fail deserialization before the
//! analysis ever runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sluice::domain::{Edge, Node, PipelineAnalysis};

/// A node record as submitted to `analyze_pipeline`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeParam {
    /// Unique identifier for the node.
    pub id: String,
}

impl From<NodeParam> for Node {
    fn from(node: NodeParam) -> Self {
        Node::new(node.id)
    }
}

/// An edge record as submitted to `analyze_pipeline`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EdgeParam {
    /// Identifier of the node the edge leaves.
    pub source: String,

    /// Identifier of the node the edge enters.
    pub target: String,
}

impl From<EdgeParam> for Edge {
    fn from(edge: EdgeParam) -> Self {
        Edge::new(edge.source, edge.target)
    }
}

/// Parameters for the `analyze_pipeline` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeParams {
    /// Declared pipeline nodes.
    pub nodes: Vec<NodeParam>,

    /// Directed edges between node identifiers.
    pub edges: Vec<EdgeParam>,
}

/// Response from the `analyze_pipeline` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
    /// Number of entries in the submitted node list.
    pub num_nodes: usize,

    /// Number of entries in the submitted edge list.
    pub num_edges: usize,

    /// Whether the edges form a directed acyclic graph.
    pub is_dag: bool,
}

impl From<PipelineAnalysis> for AnalysisResponse {
    fn from(analysis: PipelineAnalysis) -> Self {
        Self {
            num_nodes: analysis.num_nodes,
            num_edges: analysis.num_edges,
            is_dag: analysis.is_dag,
        }
    }
}

/// Response from the `ping` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PingResponse {
    /// Fixed acknowledgment payload.
    pub ping: String,
}

impl PingResponse {
    /// The acknowledgment every `ping` call returns.
    #[must_use]
    pub fn pong() -> Self {
        Self {
            ping: "pong".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_on_params_are_ignored() {
        let raw = r#"{
            "nodes": [{"id": "a", "position": {"x": 1, "y": 2}}],
            "edges": [{"source": "a", "target": "a", "animated": true}]
        }"#;
        let params: AnalyzeParams = serde_json::from_str(raw).expect("should deserialize");
        assert_eq!(params.nodes.len(), 1);
        assert_eq!(params.edges.len(), 1);
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        let raw = r#"{"nodes": [{}], "edges": []}"#;
        assert!(serde_json::from_str::<AnalyzeParams>(raw).is_err());

        let raw = r#"{"nodes": [], "edges": [{"target": "b"}]}"#;
        assert!(serde_json::from_str::<AnalyzeParams>(raw).is_err());
    }

    #[test]
    fn test_ping_response_payload() {
        let json = serde_json::to_value(PingResponse::pong()).expect("serialize");
        assert_eq!(json, serde_json::json!({"ping": "pong"}));
    }
}
