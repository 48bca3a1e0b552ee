//! Unit tests for wg-flatten.

#[cfg(test)]
mod helpers {
    use wg_core::{AttrMap, AttrValue, LonLat, NodeId};
    use wg_graph::{MapGraph, MapGraphBuilder};

    use crate::{EdgeRecord, NodeRecord};

    pub fn node(id: i64, x: f64, y: f64) -> NodeRecord {
        NodeRecord { id: NodeId(id), x, y, is_traffic_signal: false }
    }

    pub fn edge(from: i64, to: i64) -> EdgeRecord {
        EdgeRecord {
            from:     NodeId(from),
            to:       NodeId(to),
            geometry: vec![LonLat(0.0, 0.0), LonLat(1.0, 1.0)],
        }
    }

    pub fn xy(x: f64, y: f64) -> AttrMap {
        [("x", x), ("y", y)].into_iter().collect()
    }

    pub fn line(points: &[(f64, f64)]) -> AttrMap {
        let coords: Vec<LonLat> = points.iter().map(|&(x, y)| LonLat(x, y)).collect();
        [("geometry", AttrValue::Line(coords))].into_iter().collect()
    }

    /// Nodes 1, 2, 3 on a diagonal; node 3 is a traffic signal.
    ///
    /// Edges: 1→2 with geometry, 2→3 without.
    pub fn diagonal() -> MapGraph {
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(1), xy(0.0, 0.0));
        b.add_node(NodeId(2), xy(1.0, 1.0));
        let mut signal = xy(2.0, 2.0);
        signal.insert("highway", "traffic_signals");
        b.add_node(NodeId(3), signal);

        b.add_edge(NodeId(1), NodeId(2), line(&[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)])).unwrap();
        b.add_edge(NodeId(2), NodeId(3), AttrMap::new()).unwrap();
        b.build()
    }
}

// ── Edge extraction ───────────────────────────────────────────────────────────

#[cfg(test)]
mod edges {
    use wg_core::{AttrMap, AttrValue, LonLat, NodeId, WgError};
    use wg_graph::MapGraphBuilder;

    use super::helpers::{diagonal, line, xy};
    use crate::extract_edges;

    #[test]
    fn edges_without_geometry_dropped() {
        let edges = extract_edges(&diagonal()).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].from, edges[0].to), (NodeId(1), NodeId(2)));
        assert_eq!(edges[0].geometry, [LonLat(0.0, 0.0), LonLat(0.5, 0.5), LonLat(1.0, 1.0)]);
    }

    #[test]
    fn source_order_preserved() {
        let mut b = MapGraphBuilder::new();
        for id in 1..=3 {
            b.add_node(NodeId(id), xy(0.0, 0.0));
        }
        b.add_edge(NodeId(3), NodeId(1), line(&[(3.0, 3.0), (1.0, 1.0)])).unwrap();
        b.add_edge(NodeId(1), NodeId(2), line(&[(1.0, 1.0), (2.0, 2.0)])).unwrap();
        b.add_edge(NodeId(2), NodeId(3), line(&[(2.0, 2.0), (3.0, 3.0)])).unwrap();

        let ends: Vec<_> = extract_edges(&b.build())
            .unwrap()
            .iter()
            .map(|e| (e.from.get(), e.to.get()))
            .collect();
        assert_eq!(ends, [(3, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn empty_geometry_is_skipped() {
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(1), xy(0.0, 0.0));
        b.add_node(NodeId(2), xy(1.0, 1.0));
        b.add_edge(NodeId(1), NodeId(2), line(&[])).unwrap();
        assert!(extract_edges(&b.build()).unwrap().is_empty());
    }

    #[test]
    fn non_line_geometry_is_error() {
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(1), xy(0.0, 0.0));
        b.add_node(NodeId(2), xy(1.0, 1.0));
        let attrs: AttrMap = [("geometry", AttrValue::Str("LINESTRING (0 0, 1 1)".into()))]
            .into_iter()
            .collect();
        b.add_edge(NodeId(1), NodeId(2), attrs).unwrap();

        let err = extract_edges(&b.build()).unwrap_err();
        assert!(matches!(err, WgError::AttrType { key: "geometry", found: "string", .. }));
    }
}

// ── Node extraction ───────────────────────────────────────────────────────────

#[cfg(test)]
mod nodes {
    use wg_core::{AttrMap, NodeId, WgError};
    use wg_graph::MapGraphBuilder;

    use super::helpers::{diagonal, xy};
    use crate::extract_nodes;

    #[test]
    fn one_record_per_node_in_order() {
        let nodes = extract_nodes(&diagonal()).unwrap();
        let ids: Vec<_> = nodes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!((nodes[1].x, nodes[1].y), (1.0, 1.0));
    }

    #[test]
    fn traffic_signal_flag() {
        let cases: [(Option<&str>, bool); 4] = [
            (Some("traffic_signals"), true),
            (Some("crossing"), false),
            (Some("Traffic_Signals"), false),
            (None, false),
        ];
        for (highway, expected) in cases {
            let mut attrs = xy(0.0, 0.0);
            if let Some(h) = highway {
                attrs.insert("highway", h);
            }
            let mut b = MapGraphBuilder::new();
            b.add_node(NodeId(1), attrs);
            let nodes = extract_nodes(&b.build()).unwrap();
            assert_eq!(nodes[0].is_traffic_signal, expected, "highway = {highway:?}");
        }
    }

    #[test]
    fn non_string_highway_is_not_a_signal() {
        let mut attrs = xy(0.0, 0.0);
        attrs.insert("highway", true);
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(1), attrs);
        assert!(!extract_nodes(&b.build()).unwrap()[0].is_traffic_signal);
    }

    #[test]
    fn integer_coordinates_accepted() {
        let attrs: AttrMap = [("x", 3_i64), ("y", -4_i64)].into_iter().collect();
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(9), attrs);
        let nodes = extract_nodes(&b.build()).unwrap();
        assert_eq!((nodes[0].x, nodes[0].y), (3.0, -4.0));
    }

    #[test]
    fn missing_coordinate_is_fatal() {
        let mut b = MapGraphBuilder::new();
        b.add_node(NodeId(1), xy(0.0, 0.0));
        b.add_node(NodeId(2), [("x", 1.0)].into_iter().collect());

        let err = extract_nodes(&b.build()).unwrap_err();
        assert!(matches!(err, WgError::MissingAttr { key: "y", .. }));
        assert_eq!(err.to_string(), "node NodeId(2) is missing required attribute \"y\"");
    }
}

// ── Pruning ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod prune {
    use std::collections::HashSet;

    use super::helpers::{edge, node};
    use crate::{prune_disconnected, EdgeRecord, NodeRecord, Pruned};

    fn ids(nodes: &[NodeRecord]) -> Vec<i64> {
        nodes.iter().map(|n| n.id.get()).collect()
    }

    #[test]
    fn worked_example() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 1.0), node(3, 2.0, 2.0)];
        let Pruned { nodes, removed } = prune_disconnected(nodes, &[edge(1, 2)]);
        assert_eq!(ids(&nodes), [1, 2]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn no_edges_prunes_everything() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 1.0)];
        let pruned = prune_disconnected(nodes, &[]);
        assert!(pruned.nodes.is_empty());
        assert_eq!(pruned.removed, 2);
    }

    #[test]
    fn empty_input() {
        let pruned = prune_disconnected(Vec::new(), &[edge(1, 2)]);
        assert!(pruned.nodes.is_empty());
        assert_eq!(pruned.removed, 0);
    }

    #[test]
    fn order_preserved_and_both_endpoints_count() {
        let nodes: Vec<_> = [50, 40, 30, 20, 10].iter().map(|&i| node(i, 0.0, 0.0)).collect();
        let pruned = prune_disconnected(nodes, &[edge(10, 40), edge(30, 30)]);
        assert_eq!(ids(&pruned.nodes), [40, 30, 10]);
        assert_eq!(pruned.removed, 2);
    }

    #[test]
    fn edges_to_unknown_nodes_are_harmless() {
        let pruned = prune_disconnected(vec![node(1, 0.0, 0.0)], &[edge(1, 99)]);
        assert_eq!(ids(&pruned.nodes), [1]);
        assert_eq!(pruned.removed, 0);
    }

    #[test]
    fn output_is_exactly_the_referenced_nodes() {
        let edge_sets: [&[(i64, i64)]; 4] = [
            &[],
            &[(1, 2)],
            &[(2, 4), (4, 6), (6, 2)],
            &[(0, 7), (7, 0), (3, 3)],
        ];
        for set in edge_sets {
            let edges: Vec<EdgeRecord> = set.iter().map(|&(f, t)| edge(f, t)).collect();
            let nodes: Vec<_> = (0..8).map(|i| node(i, i as f64, 0.0)).collect();

            let referenced: HashSet<i64> = set.iter().flat_map(|&(f, t)| [f, t]).collect();
            let expected: Vec<i64> = (0..8).filter(|i| referenced.contains(i)).collect();

            let first = prune_disconnected(nodes, &edges);
            assert_eq!(ids(&first.nodes), expected, "edges = {set:?}");
            assert_eq!(first.removed, 8 - expected.len());

            let again = prune_disconnected(first.nodes.clone(), &edges);
            assert_eq!(again.nodes, first.nodes, "pruning is idempotent");
            assert_eq!(again.removed, 0);
        }
    }
}

// ── Full flatten ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod flatten {
    use wg_core::{LonLat, NodeId};
    use wg_graph::{MapGraph, MapGraphBuilder};

    use super::helpers::{diagonal, line, xy};
    use crate::{flatten, EdgeRecord, NodeRecord};

    #[test]
    fn signal_node_pruned_with_its_geometryless_edge() {
        let flat = flatten(&diagonal()).unwrap();
        let ids: Vec<_> = flat.nodes.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(flat.edges.len(), 1);
        assert_eq!(flat.pruned, 1);
    }

    #[test]
    fn every_node_touches_an_edge() {
        let mut b = MapGraphBuilder::new();
        for id in 1..=6 {
            b.add_node(NodeId(id), xy(id as f64, 0.0));
        }
        b.add_edge(NodeId(1), NodeId(2), line(&[(1.0, 0.0), (2.0, 0.0)])).unwrap();
        b.add_edge(NodeId(2), NodeId(1), line(&[(2.0, 0.0), (1.0, 0.0)])).unwrap();
        b.add_edge(NodeId(3), NodeId(4), Default::default()).unwrap();
        b.add_edge(NodeId(5), NodeId(5), line(&[(5.0, 0.0), (5.1, 0.1), (5.0, 0.0)])).unwrap();

        let flat = flatten(&b.build()).unwrap();
        for n in &flat.nodes {
            assert!(flat.edges.iter().any(|e| e.from == n.id || e.to == n.id), "{} dangling", n.id);
        }
        assert!(flat.edges.iter().all(|e| !e.geometry.is_empty()));
        assert_eq!(flat.pruned, 3);
    }

    #[test]
    fn empty_graph() {
        let flat = flatten(&MapGraph::empty()).unwrap();
        assert!(flat.nodes.is_empty());
        assert!(flat.edges.is_empty());
        assert_eq!(flat.pruned, 0);
    }

    #[test]
    fn json_shape() {
        let flat = flatten(&diagonal()).unwrap();

        let node = serde_json::to_value(&flat.nodes[0]).unwrap();
        assert_eq!(node, serde_json::json!({ "id": 1, "x": 0.0, "y": 0.0, "is_traffic_signal": false }));

        let edge = serde_json::to_value(&flat.edges[0]).unwrap();
        assert_eq!(
            edge,
            serde_json::json!({ "from": 1, "to": 2, "geometry": [[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]] })
        );
    }

    #[test]
    fn json_round_trip() {
        let flat = flatten(&diagonal()).unwrap();

        let nodes_text = serde_json::to_string_pretty(&flat.nodes).unwrap();
        let edges_text = serde_json::to_string_pretty(&flat.edges).unwrap();
        let nodes: Vec<NodeRecord> = serde_json::from_str(&nodes_text).unwrap();
        let edges: Vec<EdgeRecord> = serde_json::from_str(&edges_text).unwrap();

        assert_eq!(nodes, flat.nodes);
        assert_eq!(edges, flat.edges);
        assert_eq!(edges[0].geometry[1], LonLat(0.5, 0.5));
    }
}
