//! Plain output records.
//!
//! Field names are the JSON keys of `nodes.json` and `edges.json`.

use serde::{Deserialize, Serialize};

use wg_core::{LonLat, NodeId};

/// One graph node: position and whether it is a signalised crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
    pub is_traffic_signal: bool,
}

/// One directed path segment with the polyline connecting its endpoints.
///
/// `geometry` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub geometry: Vec<LonLat>,
}

/// Result of a full flatten: every node is an endpoint of some edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatGraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    /// Number of nodes removed by pruning.
    pub pruned: usize,
}
