//! Source graph → record extraction.
//!
//! Both extractors preserve the source iteration order and never sort.

use tracing::debug;

use wg_core::{AttrValue, WgError, WgResult};
use wg_graph::SourceGraph;

use crate::record::{EdgeRecord, NodeRecord};

/// `highway` value marking a signalised crossing node.
const TRAFFIC_SIGNALS: &str = "traffic_signals";

/// One [`EdgeRecord`] per source edge that has a `geometry` attribute.
///
/// Edges without geometry (plain two-node segments) are skipped, as are
/// edges whose geometry has no points.
///
/// # Errors
///
/// [`WgError::AttrType`] if `geometry` is present but not a line string.
pub fn extract_edges<G: SourceGraph>(graph: &G) -> WgResult<Vec<EdgeRecord>> {
    let mut edges = Vec::with_capacity(graph.edge_count());

    for (from, to, attrs) in graph.edges() {
        let Some(value) = attrs.get("geometry") else {
            continue;
        };
        let AttrValue::Line(coords) = value else {
            return Err(WgError::AttrType {
                owner:    format!("edge {from} -> {to}"),
                key:      "geometry",
                expected: "linestring",
                found:    value.type_name(),
            });
        };
        if coords.is_empty() {
            continue;
        }
        edges.push(EdgeRecord { from, to, geometry: coords.clone() });
    }

    debug!(kept = edges.len(), source = graph.edge_count(), "extracted edges");
    Ok(edges)
}

/// One [`NodeRecord`] per source node.
///
/// # Errors
///
/// [`WgError::MissingAttr`] if a node lacks `x` or `y`,
/// [`WgError::AttrType`] if either is not numeric.
pub fn extract_nodes<G: SourceGraph>(graph: &G) -> WgResult<Vec<NodeRecord>> {
    graph
        .nodes()
        .map(|(id, attrs)| {
            let owner = || format!("node {id}");
            Ok(NodeRecord {
                id,
                x: attrs.require_f64("x", owner)?,
                y: attrs.require_f64("y", owner)?,
                is_traffic_signal: attrs.get_str("highway") == Some(TRAFFIC_SIGNALS),
            })
        })
        .collect()
}
