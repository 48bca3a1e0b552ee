//! The `OutputWriter` trait implemented by all backend writers.

use wg_flatten::{EdgeRecord, FlatGraph, NodeRecord};

use crate::OutputResult;

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write the full node collection.
    fn write_nodes(&mut self, nodes: &[NodeRecord]) -> OutputResult<()>;

    /// Write the full edge collection.
    fn write_edges(&mut self, edges: &[EdgeRecord]) -> OutputResult<()>;

    /// Write nodes, then edges.
    ///
    /// Not transactional: if the edge write fails the node output is left
    /// in place.
    fn write_flat(&mut self, flat: &FlatGraph) -> OutputResult<()> {
        self.write_nodes(&flat.nodes)?;
        self.write_edges(&flat.edges)
    }
}
