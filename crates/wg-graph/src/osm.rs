//! OSM PBF walk-network loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use wg_core::ExtractConfig;
//! use wg_graph::osm::load_walk_graph;
//!
//! let graph = load_walk_graph(&ExtractConfig::waterloo())?;
//! ```
//!
//! # What is loaded
//!
//! Only ways whose `highway` tag matches [`ExtractConfig::path_filter`] are
//! kept.  OSM nodes are read from the query square (`radius_m` metres around
//! [`ExtractConfig::center`]) widened by [`PERIPHERY_BUFFER_M`], so that
//! paths crossing the square's edge are simplified against their real
//! continuation rather than against the cut.  A way that leaves the buffered
//! area is split into one piece per stretch inside it.
//!
//! # Simplification
//!
//! Graph nodes are the ends of each way piece plus every OSM node that is
//! used more than once (shared by two ways, or revisited by one).  The OSM
//! nodes in between are folded into the edge: an edge built from more than
//! two OSM nodes carries a `geometry` line string of all of them, a plain
//! two-node segment carries none.
//!
//! # Truncation
//!
//! After simplification (and after `street_count` is taken, so counts
//! include streets that leave the square) every graph node outside the query
//! square is dropped together with its edges.  Of what remains only the
//! largest weakly connected component is kept.
//!
//! Walking is undirected, so every segment is added in both directions; the
//! reverse edge carries the reversed geometry.  Self-loops are added once.

use std::path::Path;

use osmpbf::{Element, ElementReader};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use wg_core::{AttrMap, AttrValue, BBox, ExtractConfig, GeoPoint, LonLat, NodeId, WayId};

use crate::graph::{MapGraph, MapGraphBuilder};
use crate::{GraphError, GraphResult};

/// Extra distance read around the query square before simplifying.
pub const PERIPHERY_BUFFER_M: f64 = 500.0;

// ── Public entry point ────────────────────────────────────────────────────────

/// Load the walk network described by `config` from `config.source_pbf`.
///
/// # Errors
///
/// Returns [`GraphError::Core`] for an invalid configuration,
/// [`GraphError::Filter`] if `path_filter` is not a valid regex,
/// [`GraphError::Osm`] on parse errors and [`GraphError::Io`] on file errors.
pub fn load_walk_graph(config: &ExtractConfig) -> GraphResult<MapGraph> {
    config.validate()?;
    let filter = Regex::new(&config.path_filter)?;
    let bbox = config.center.bbox_around(config.radius_m);
    let buffered = config.center.bbox_around(config.radius_m + PERIPHERY_BUFFER_M);
    let (nodes, ways) = read_pbf(&config.source_pbf, &buffered, &filter)?;
    info!(
        path = %config.source_pbf.display(),
        nodes = nodes.len(),
        ways = ways.len(),
        "read OSM extract"
    );
    build_walk_graph(&nodes, &ways, &bbox)
}

// ── Internal types ────────────────────────────────────────────────────────────

pub(crate) struct OsmNode {
    pub(crate) pos:     GeoPoint,
    pub(crate) highway: Option<String>,
}

pub(crate) struct OsmWay {
    pub(crate) id:      WayId,
    pub(crate) refs:    Vec<i64>,
    pub(crate) highway: String,
    pub(crate) name:    Option<String>,
}

/// One simplified segment between two graph nodes.
struct Segment<'w> {
    way:  &'w OsmWay,
    refs: &'w [i64],
}

impl Segment<'_> {
    fn first(&self) -> i64 {
        self.refs[0]
    }

    fn last(&self) -> i64 {
        self.refs[self.refs.len() - 1]
    }
}

// ── Phase 1: read ─────────────────────────────────────────────────────────────

/// Collect the OSM nodes inside `bbox` and the ways matching `filter`.
fn read_pbf(
    path: &Path,
    bbox: &BBox,
    filter: &Regex,
) -> GraphResult<(FxHashMap<i64, OsmNode>, Vec<OsmWay>)> {
    let reader = ElementReader::from_path(path).map_err(|e| GraphError::Osm(e.to_string()))?;

    let mut nodes: FxHashMap<i64, OsmNode> = FxHashMap::default();
    let mut ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                let pos = GeoPoint::new(n.lat(), n.lon());
                if bbox.contains(pos) {
                    let highway = n.tags().find(|(k, _)| *k == "highway").map(|(_, v)| v.to_owned());
                    nodes.insert(n.id(), OsmNode { pos, highway });
                }
            }
            Element::DenseNode(n) => {
                let pos = GeoPoint::new(n.lat(), n.lon());
                if bbox.contains(pos) {
                    let highway = n.tags().find(|(k, _)| *k == "highway").map(|(_, v)| v.to_owned());
                    nodes.insert(n.id(), OsmNode { pos, highway });
                }
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

                if let Some(highway) = tag("highway").filter(|h| filter.is_match(h)) {
                    ways.push(OsmWay {
                        id:      WayId(w.id()),
                        refs:    w.refs().collect(),
                        highway: highway.to_owned(),
                        name:    tag("name").map(str::to_owned),
                    });
                }
            }
            Element::Relation(_) => {}
        })
        .map_err(|e| GraphError::Osm(e.to_string()))?;

    Ok((nodes, ways))
}

// ── Phase 2 + 3: clip, simplify, truncate ─────────────────────────────────────

/// Build the simplified, bidirectional walk graph from already-read OSM data.
///
/// `nodes` holds the OSM nodes of the buffered area; way refs missing from it
/// are treated as outside and split the way.  Graph nodes outside `bbox` are
/// dropped after simplification, then everything but the largest weakly
/// connected component.
pub(crate) fn build_walk_graph(
    nodes: &FxHashMap<i64, OsmNode>,
    ways: &[OsmWay],
    bbox: &BBox,
) -> GraphResult<MapGraph> {
    // Clip every way into runs of consecutive in-area refs.
    let mut pieces: Vec<(&OsmWay, &[i64])> = Vec::new();
    for way in ways {
        for run in way.refs.split(|r| !nodes.contains_key(r)) {
            if run.len() >= 2 {
                pieces.push((way, run));
            }
        }
    }

    // A ref is a graph node if it ends a piece or is used more than once.
    let mut uses: FxHashMap<i64, u32> = FxHashMap::default();
    for &(_, run) in &pieces {
        for r in run {
            *uses.entry(*r).or_default() += 1;
        }
    }
    let is_graph_node = |run: &[i64], i: usize| i == 0 || i == run.len() - 1 || uses[&run[i]] > 1;

    let mut segments: Vec<Segment<'_>> = Vec::new();
    for &(way, run) in &pieces {
        let mut start = 0;
        for i in 1..run.len() {
            if is_graph_node(run, i) {
                segments.push(Segment { way, refs: &run[start..=i] });
                start = i;
            }
        }
    }
    debug!(pieces = pieces.len(), segments = segments.len(), "simplified ways");

    // Street count: segment ends touching each graph node, before truncation.
    let mut street_count: FxHashMap<i64, i64> = FxHashMap::default();
    for seg in &segments {
        *street_count.entry(seg.first()).or_default() += 1;
        *street_count.entry(seg.last()).or_default() += 1;
    }

    let inside = |r: i64| bbox.contains(nodes[&r].pos);
    segments.retain(|seg| inside(seg.first()) && inside(seg.last()));
    let segments = largest_component(segments);
    debug!(segments = segments.len(), "truncated to query area");

    let mut builder = MapGraphBuilder::with_capacity(street_count.len(), segments.len() * 2);

    // Nodes in order of first appearance so output is deterministic.
    for seg in &segments {
        for osm_id in [seg.first(), seg.last()] {
            let id = NodeId(osm_id);
            if builder.contains_node(id) {
                continue;
            }
            let node = &nodes[&osm_id];
            let mut attrs = AttrMap::new();
            attrs.insert("x", node.pos.lon);
            attrs.insert("y", node.pos.lat);
            attrs.insert("street_count", street_count[&osm_id]);
            if let Some(highway) = &node.highway {
                attrs.insert("highway", highway.as_str());
            }
            builder.add_node(id, attrs);
        }
    }

    for seg in &segments {
        let from = NodeId(seg.first());
        let to = NodeId(seg.last());

        let coords: Vec<LonLat> = seg.refs.iter().map(|r| nodes[r].pos.to_lon_lat()).collect();
        let length_m: f64 = seg
            .refs
            .windows(2)
            .map(|w| nodes[&w[0]].pos.distance_m(nodes[&w[1]].pos))
            .sum();

        let forward = edge_attrs(seg.way, length_m, &coords);
        builder.add_edge(from, to, forward)?;

        if from != to {
            let reversed: Vec<LonLat> = coords.iter().rev().copied().collect();
            let backward = edge_attrs(seg.way, length_m, &reversed);
            builder.add_edge(to, from, backward)?;
        }
    }

    let graph = builder.build();
    info!(
        nodes = graph.node_slice().len(),
        edges = graph.edge_slice().len(),
        "built walk graph"
    );
    Ok(graph)
}

// ── Connectivity ──────────────────────────────────────────────────────────────

/// Keep only the segments of the largest weakly connected component.
///
/// Ties go to the component whose first node appears earliest.
fn largest_component(segments: Vec<Segment<'_>>) -> Vec<Segment<'_>> {
    let mut parent: FxHashMap<i64, i64> = FxHashMap::default();
    let mut order: Vec<i64> = Vec::new();
    for seg in &segments {
        for id in [seg.first(), seg.last()] {
            if !parent.contains_key(&id) {
                parent.insert(id, id);
                order.push(id);
            }
        }
    }
    for seg in &segments {
        let a = find_root(&mut parent, seg.first());
        let b = find_root(&mut parent, seg.last());
        if a != b {
            parent.insert(b, a);
        }
    }

    let mut sizes: FxHashMap<i64, usize> = FxHashMap::default();
    for id in &order {
        *sizes.entry(find_root(&mut parent, *id)).or_default() += 1;
    }
    let mut best: Option<(i64, usize)> = None;
    for id in &order {
        let root = find_root(&mut parent, *id);
        let size = sizes[&root];
        if best.is_none_or(|(_, best_size)| size > best_size) {
            best = Some((root, size));
        }
    }

    let Some((keep, size)) = best else {
        return segments;
    };
    debug!(components = sizes.len(), kept_nodes = size, "kept largest component");
    segments
        .into_iter()
        .filter(|seg| find_root(&mut parent, seg.first()) == keep)
        .collect()
}

/// Union-find root lookup with path halving.
fn find_root(parent: &mut FxHashMap<i64, i64>, mut id: i64) -> i64 {
    loop {
        let up = parent[&id];
        if up == id {
            return id;
        }
        let grand = parent[&up];
        parent.insert(id, grand);
        id = grand;
    }
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

fn edge_attrs(way: &OsmWay, length_m: f64, coords: &[LonLat]) -> AttrMap {
    let mut attrs = AttrMap::new();
    attrs.insert("osmid", way.id.get());
    attrs.insert("highway", way.highway.as_str());
    attrs.insert("length", length_m);
    if let Some(name) = &way.name {
        attrs.insert("name", name.as_str());
    }
    // Plain two-node segments have no interstitial shape to record.
    if coords.len() > 2 {
        attrs.insert("geometry", AttrValue::Line(coords.to_vec()));
    }
    attrs
}
