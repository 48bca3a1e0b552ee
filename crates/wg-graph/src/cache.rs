//! JSON graph cache — enabled with the `cache` Cargo feature.
//!
//! Parsing a PBF extract is the slow part of a run, so the extracted
//! [`MapGraph`] can be written next to the source data and reused.  The
//! cache is a plain serde_json dump of the graph; it is not meant to be
//! edited by hand.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::graph::MapGraph;
use crate::GraphResult;

/// Write `graph` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn save_graph(path: &Path, graph: &MapGraph) -> GraphResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, graph)?;
    out.flush()?;
    Ok(())
}

/// Read a graph previously written by [`save_graph`].
pub fn load_graph(path: &Path) -> GraphResult<MapGraph> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Load the cached graph at `path` if it exists, otherwise call `build` and
/// cache its result at `path`.
///
/// A cache file that exists but cannot be parsed is an error; it is not
/// silently rebuilt.
pub fn load_or_build<F>(path: &Path, build: F) -> GraphResult<MapGraph>
where
    F: FnOnce() -> GraphResult<MapGraph>,
{
    if path.exists() {
        let graph = load_graph(path)?;
        info!(path = %path.display(), "loaded cached graph");
        return Ok(graph);
    }

    let graph = build()?;
    save_graph(path, &graph)?;
    info!(path = %path.display(), "cached graph");
    Ok(graph)
}
