//! Source graph representation and builder.
//!
//! # Data layout
//!
//! A [`MapGraph`] is an insertion-ordered directed multigraph: nodes and
//! edges live in two `Vec`s and are yielded in the order they were added.
//! Parallel edges between the same pair of nodes are allowed (two ways can
//! connect the same intersections), as are self-loops.
//!
//! Every element carries an [`AttrMap`]; the graph itself never interprets
//! attributes.  Consumers go through the [`SourceGraph`] trait so other
//! providers can be substituted for `MapGraph`.

use rustc_hash::FxHashMap;

use wg_core::{AttrMap, NodeId};

use crate::{GraphError, GraphResult};

// ── SourceGraph trait ─────────────────────────────────────────────────────────

/// Read-only view of a map graph: node and edge iteration with attributes.
///
/// Both iterators must yield elements in a stable order (the provider's
/// insertion order) so that repeated runs over the same graph produce
/// identical output.
pub trait SourceGraph {
    /// `(id, attrs)` for every node.
    fn nodes(&self) -> impl Iterator<Item = (NodeId, &AttrMap)>;

    /// `(from, to, attrs)` for every directed edge.
    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &AttrMap)>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

// ── MapGraph ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceNode {
    pub id:    NodeId,
    pub attrs: AttrMap,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceEdge {
    pub from:  NodeId,
    pub to:    NodeId,
    pub attrs: AttrMap,
}

/// In-memory map graph.  Construct with [`MapGraphBuilder`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapGraph {
    nodes: Vec<SourceNode>,
    edges: Vec<SourceEdge>,
}

impl MapGraph {
    /// A graph with no nodes or edges.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_slice(&self) -> &[SourceNode] {
        &self.nodes
    }

    pub fn edge_slice(&self) -> &[SourceEdge] {
        &self.edges
    }
}

impl SourceGraph for MapGraph {
    fn nodes(&self) -> impl Iterator<Item = (NodeId, &AttrMap)> {
        self.nodes.iter().map(|n| (n.id, &n.attrs))
    }

    fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &AttrMap)> {
        self.edges.iter().map(|e| (e.from, e.to, &e.attrs))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ── MapGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`MapGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes must be added before any edge that references them.
///
/// # Example
///
/// ```
/// use wg_core::{AttrMap, NodeId};
/// use wg_graph::{MapGraphBuilder, SourceGraph};
///
/// let mut b = MapGraphBuilder::new();
/// b.add_node(NodeId(1), [("x", -80.52), ("y", 43.47)].into_iter().collect());
/// b.add_node(NodeId(2), [("x", -80.53), ("y", 43.46)].into_iter().collect());
/// b.add_edge(NodeId(1), NodeId(2), AttrMap::new()).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct MapGraphBuilder {
    nodes: Vec<SourceNode>,
    edges: Vec<SourceEdge>,
    index: FxHashMap<NodeId, usize>,
}

impl MapGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(nodes);
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            index,
        }
    }

    /// Add a node.  Re-adding an existing id replaces its attributes but
    /// keeps the position of the first insertion.
    pub fn add_node(&mut self, id: NodeId, attrs: AttrMap) {
        match self.index.get(&id) {
            Some(&slot) => self.nodes[slot].attrs = attrs,
            None => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push(SourceNode { id, attrs });
            }
        }
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint has not been added.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, attrs: AttrMap) -> GraphResult<()> {
        for id in [from, to] {
            if !self.index.contains_key(&id) {
                return Err(GraphError::NodeNotFound(id));
            }
        }
        self.edges.push(SourceEdge { from, to, attrs });
        Ok(())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`MapGraph`].
    pub fn build(self) -> MapGraph {
        MapGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl Default for MapGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
