//! `wg-flatten` — graph flattener and connectivity pruner.
//!
//! Walks a [`SourceGraph`](wg_graph::SourceGraph) once, copies the few
//! attributes the output needs into plain records, and drops nodes no
//! surviving edge touches.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`record`]  | `NodeRecord`, `EdgeRecord`, `FlatGraph`                 |
//! | [`extract`] | `extract_edges`, `extract_nodes`                        |
//! | [`prune`]   | `prune_disconnected`, `Pruned`                          |
//!
//! [`flatten`] runs all three steps in order.

pub mod extract;
pub mod prune;
pub mod record;

#[cfg(test)]
mod tests;

pub use extract::{extract_edges, extract_nodes};
pub use prune::{prune_disconnected, Pruned};
pub use record::{EdgeRecord, FlatGraph, NodeRecord};

use tracing::info;

use wg_core::WgResult;
use wg_graph::SourceGraph;

/// Extract edges, then nodes, then prune nodes left without an edge.
///
/// # Errors
///
/// Propagates the attribute errors of [`extract_edges`] and
/// [`extract_nodes`]; nothing is returned on partial failure.
pub fn flatten<G: SourceGraph>(graph: &G) -> WgResult<FlatGraph> {
    let edges = extract_edges(graph)?;
    let nodes = extract_nodes(graph)?;
    let Pruned { nodes, removed } = prune_disconnected(nodes, &edges);

    info!(nodes = nodes.len(), edges = edges.len(), pruned = removed, "flattened graph");
    Ok(FlatGraph { nodes, edges, pruned: removed })
}
