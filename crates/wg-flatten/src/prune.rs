//! Connectivity pruning.

use rustc_hash::FxHashSet;
use tracing::debug;

use wg_core::NodeId;

use crate::record::{EdgeRecord, NodeRecord};

/// Nodes that survived pruning and how many were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Pruned {
    pub nodes:   Vec<NodeRecord>,
    pub removed: usize,
}

/// Keep only nodes that are the `from` or `to` of at least one edge.
///
/// Surviving nodes keep their relative order.  With no edges every node is
/// removed.  Running this again on its own output with the same edges
/// removes nothing.
pub fn prune_disconnected(mut nodes: Vec<NodeRecord>, edges: &[EdgeRecord]) -> Pruned {
    let connected: FxHashSet<NodeId> = edges.iter().flat_map(|e| [e.from, e.to]).collect();

    let before = nodes.len();
    nodes.retain(|n| connected.contains(&n.id));
    let removed = before - nodes.len();

    debug!(before, after = nodes.len(), removed, "pruned disconnected nodes");
    Pruned { nodes, removed }
}
