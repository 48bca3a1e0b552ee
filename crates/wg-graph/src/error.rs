//! Graph-subsystem error type.

use thiserror::Error;

use wg_core::{NodeId, WgError};

/// Errors produced by `wg-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error(transparent)]
    Core(#[from] WgError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),

    #[cfg(feature = "osm")]
    #[error("invalid path filter: {0}")]
    Filter(#[from] regex::Error),

    #[cfg(feature = "cache")]
    #[error("graph cache error: {0}")]
    Cache(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
