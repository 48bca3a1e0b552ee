//! `waterloo` — pedestrian path graph for 400 m around the University of
//! Waterloo.
//!
//! 1. Load the walk graph from the cache, or parse it out of the PBF extract
//!    and cache it.
//! 2. Flatten it into node and edge records, pruning disconnected nodes.
//! 3. Write `graphs/nodes.json` and `graphs/edges.json`.
//!
//! Both `maps/` and `graphs/` must exist.  Log verbosity is controlled with
//! `WALKGRAPH_LOG` (default `info`).
//!
//! Run with:
//!   cargo run -p waterloo --release

mod logging;

use anyhow::{Context, Result};
use tracing::info;

use wg_core::ExtractConfig;
use wg_graph::{cache, osm, MapGraph};
use wg_output::{JsonWriter, OutputWriter};

fn main() -> Result<()> {
    logging::init()?;

    let config = ExtractConfig::waterloo();
    config.validate()?;
    info!(center = %config.center, radius_m = config.radius_m, filter = %config.path_filter, "extracting walk graph");

    let graph = load_graph(&config)?;

    let flat = wg_flatten::flatten(&graph).context("flattening walk graph")?;

    let mut writer = JsonWriter::from_config(&config);
    writer.write_flat(&flat)?;

    println!("Pruned {} disconnected nodes.", flat.pruned);
    Ok(())
}

fn load_graph(config: &ExtractConfig) -> Result<MapGraph> {
    let graph = match &config.graph_cache {
        Some(path) => cache::load_or_build(path, || osm::load_walk_graph(config)),
        None => osm::load_walk_graph(config),
    };
    graph.with_context(|| format!("loading walk graph from {}", config.source_pbf.display()))
}
