//! JSON output backend.
//!
//! Writes two files:
//! - `nodes.json` — `[{id, x, y, is_traffic_signal}, …]`
//! - `edges.json` — `[{from, to, geometry: [[lon, lat], …]}, …]`
//!
//! The destination directory must already exist; it is never created here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use wg_core::ExtractConfig;
use wg_flatten::{EdgeRecord, NodeRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes node and edge arrays to two pretty-printed JSON files.
pub struct JsonWriter {
    nodes_path: PathBuf,
    edges_path: PathBuf,
}

impl JsonWriter {
    pub fn new(nodes_path: impl Into<PathBuf>, edges_path: impl Into<PathBuf>) -> Self {
        Self {
            nodes_path: nodes_path.into(),
            edges_path: edges_path.into(),
        }
    }

    /// `nodes.json` and `edges.json` inside `dir`.
    #[cfg(test)]
    pub(crate) fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("nodes.json"), dir.join("edges.json"))
    }

    /// Use the output paths of `config`.
    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(&config.nodes_path, &config.edges_path)
    }

    pub fn nodes_path(&self) -> &Path {
        &self.nodes_path
    }

    pub fn edges_path(&self) -> &Path {
        &self.edges_path
    }
}

impl OutputWriter for JsonWriter {
    fn write_nodes(&mut self, nodes: &[NodeRecord]) -> OutputResult<()> {
        write_array(&self.nodes_path, nodes)?;
        info!(path = %self.nodes_path.display(), count = nodes.len(), "wrote nodes");
        Ok(())
    }

    fn write_edges(&mut self, edges: &[EdgeRecord]) -> OutputResult<()> {
        write_array(&self.edges_path, edges)?;
        info!(path = %self.edges_path.display(), count = edges.len(), "wrote edges");
        Ok(())
    }
}

/// Serialize `rows` as one pretty-printed JSON array, replacing `path`.
fn write_array<T: Serialize>(path: &Path, rows: &[T]) -> OutputResult<()> {
    let io_err = |source| OutputError::Io { path: path.to_owned(), source };

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut out, rows).map_err(|source| {
        // serde_json wraps write failures; keep them as I/O errors.
        if source.is_io() {
            OutputError::Io { path: path.to_owned(), source: source.into() }
        } else {
            OutputError::Json { path: path.to_owned(), source }
        }
    })?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)
}
