//! Graph analysis over submitted pipelines.
//!
//! This module provides the one analytical operation of the crate:
//! - Literal node and edge counts
//! - Cycle detection (DAG verdict) via three-state depth-first traversal
//!
//! The traversal distinguishes three states per vertex: `Unvisited`,
//! `InProgress` (on the current root-to-leaf path) and `Done` (fully
//! explored). Meeting an `InProgress` neighbor is a back edge and the
//! exact cycle condition; meeting a `Done` neighbor is a harmless cross
//! or forward edge, such as a shared dependency reached along two
//! different paths. A two-state scheme cannot tell those apart.
//!
//! All traversal state is allocated per call and discarded on return,
//! so concurrent calls need no coordination.

use crate::domain::{Edge, Node, PipelineAnalysis};
use std::collections::HashMap;

/// Visitation state for one vertex during a single traversal.
///
/// A vertex moves `Unvisited` -> `InProgress` -> `Done` and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// Not yet reached by any traversal root.
    Unvisited,
    /// On the current root-to-leaf path.
    InProgress,
    /// Fully explored; every path out of it is known cycle-free.
    Done,
}

/// Analyze a submitted pipeline.
///
/// Counts are literal: duplicate node records or repeated edges inflate
/// the counts exactly as listed, and are never deduplicated. The DAG
/// verdict covers the union of declared node identifiers and every
/// identifier appearing as an edge endpoint, so edges referencing
/// undeclared nodes are still traversed.
///
/// The inputs are not mutated and the operation cannot fail: every
/// finite node/edge listing has a definite verdict.
#[must_use]
pub fn analyze(nodes: &[Node], edges: &[Edge]) -> PipelineAnalysis {
    PipelineAnalysis {
        num_nodes: nodes.len(),
        num_edges: edges.len(),
        is_dag: is_acyclic(nodes, edges),
    }
}

/// Check whether the directed graph formed by `edges` is acyclic.
///
/// An empty edge list is trivially acyclic; a self-loop never is.
/// Declared nodes that no edge touches cannot contribute a cycle but
/// are still seeded into the traversal so the scan covers them.
#[must_use]
pub fn is_acyclic(nodes: &[Node], edges: &[Edge]) -> bool {
    let adjacency = build_adjacency(nodes, edges);

    let mut state: HashMap<&str, VisitState> = adjacency
        .keys()
        .map(|&id| (id, VisitState::Unvisited))
        .collect();

    // Launch a traversal from every still-unvisited vertex so each
    // disconnected component is scanned; a cycle anywhere fails the
    // whole verdict.
    for &root in adjacency.keys() {
        if state[root] == VisitState::Unvisited && scan_detects_cycle(&adjacency, &mut state, root)
        {
            return false;
        }
    }

    true
}

/// Build the outbound adjacency mapping.
///
/// Adjacency comes from the edges alone: endpoints missing from the
/// declared node list become vertices here instead of being dropped or
/// failing the call. Declared nodes are seeded with empty entries so
/// isolated ones remain visitable.
fn build_adjacency<'a>(nodes: &'a [Node], edges: &'a [Edge]) -> HashMap<&'a str, Vec<&'a str>> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();

    for node in nodes {
        adjacency.entry(node.id.as_str()).or_default();
    }

    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        adjacency.entry(edge.target.as_str()).or_default();
    }

    adjacency
}

/// Depth-first scan from `root`, returning `true` if it finds a cycle.
///
/// The scan drives an explicit stack of `(vertex, next neighbor index)`
/// frames instead of native recursion, so traversal depth is bounded by
/// heap memory rather than the call stack. Visitation order and
/// semantics are identical to the recursive formulation: a vertex is
/// marked `InProgress` when pushed and `Done` once all of its neighbors
/// have been processed without finding a back edge.
fn scan_detects_cycle<'a>(
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    state: &mut HashMap<&'a str, VisitState>,
    root: &'a str,
) -> bool {
    let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
    state.insert(root, VisitState::InProgress);

    while let Some(frame) = stack.last_mut() {
        let (vertex, next) = *frame;
        let neighbors = &adjacency[vertex];

        if let Some(&neighbor) = neighbors.get(next) {
            frame.1 += 1;
            let neighbor_state = state[neighbor];
            match neighbor_state {
                // Back edge: the neighbor is an ancestor still on the
                // current path.
                VisitState::InProgress => return true,
                VisitState::Unvisited => {
                    state.insert(neighbor, VisitState::InProgress);
                    stack.push((neighbor, 0));
                }
                VisitState::Done => {}
            }
        } else {
            state.insert(vertex, VisitState::Done);
            stack.pop();
        }
    }

    false
}
