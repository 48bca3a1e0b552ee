//! `wg-core` — foundational types for the `walkgraph` extractor.
//!
//! This crate is a dependency of every other `wg-*` crate.  It has no `wg-*`
//! dependencies and minimal external ones (only `rustc-hash` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `WayId`                                     |
//! | [`geo`]         | `GeoPoint`, `LonLat`, `BBox`, haversine distance      |
//! | [`attrs`]       | `AttrMap`, `AttrValue`                                |
//! | [`config`]      | `ExtractConfig`                                       |
//! | [`error`]       | `WgError`, `WgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `wg-flatten` and the graph cache.              |

pub mod attrs;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{AttrMap, AttrValue};
pub use config::ExtractConfig;
pub use error::{WgError, WgResult};
pub use geo::{BBox, GeoPoint, LonLat};
pub use ids::{NodeId, WayId};
