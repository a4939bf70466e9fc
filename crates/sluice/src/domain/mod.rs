//! Domain types for pipeline analysis.
//!
//! This module contains the typed request and response shapes. Node and
//! edge records arrive as JSON objects that may carry arbitrary extra
//! fields (positions, labels, UI state); only the identifiers matter
//! here, so unknown fields are ignored during deserialization while
//! missing identifier fields are rejected before any graph logic runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a pipeline node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A node in a submitted pipeline
///
/// Any metadata beyond the identifier is dropped at deserialization;
/// the analysis never examines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for the node
    pub id: NodeId,
}

impl Node {
    /// Create a node from anything that converts into a [`NodeId`]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

/// A directed edge between two pipeline nodes
///
/// Repeated edges between the same ordered pair are allowed and carry
/// no extra structural meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the node the edge leaves
    pub source: NodeId,

    /// Identifier of the node the edge enters
    pub target: NodeId,
}

impl Edge {
    /// Create an edge between two identifiers
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A submitted pipeline: the node list and edge list as given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Declared nodes, in submission order
    pub nodes: Vec<Node>,

    /// Directed edges, in submission order
    pub edges: Vec<Edge>,
}

/// Structural verdict for a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineAnalysis {
    /// Number of entries in the submitted node list (duplicates counted)
    pub num_nodes: usize,

    /// Number of entries in the submitted edge list (duplicates counted)
    pub num_edges: usize,

    /// Whether the edges form a directed acyclic graph
    pub is_dag: bool,
}
