//! `wg-graph` — the source map graph the flattener reads from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `SourceGraph` trait, `MapGraph`, `MapGraphBuilder`          |
//! | [`osm`]     | `load_walk_graph` (feature = `"osm"` only)                  |
//! | [`cache`]   | `save_graph`, `load_graph`, `load_or_build` (feature = `"cache"`) |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.              |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |
//! | `cache` | JSON graph cache; implies `serde`.                           |
//!
//! The `osm`, `pbf` and `cache` test modules are compiled only with their
//! features, so a plain `cargo test -p wg-graph` skips them.  Run the full
//! suite with:
//!
//! ```text
//! cargo test -p wg-graph --all-features
//! ```

pub mod error;
pub mod graph;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(feature = "cache")]
pub mod cache;


pub use error::{GraphError, GraphResult};
pub use graph::{MapGraph, MapGraphBuilder, SourceEdge, SourceGraph, SourceNode};
