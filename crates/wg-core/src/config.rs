//! Run configuration for one extraction.
//!
//! Every value the run depends on (query point, radius, path filter, input
//! and output locations) lives here and is passed explicitly into the loader
//! and writer.

use std::path::PathBuf;

use crate::{GeoPoint, WgError, WgResult};

/// Configuration for a single extract → flatten → write run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractConfig {
    /// Query point the graph is centred on.
    pub center: GeoPoint,

    /// Half-width of the square query area, in metres.
    pub radius_m: f64,

    /// Regex matched against a way's `highway` tag.  Ways whose tag does not
    /// match are ignored by the OSM loader.
    pub path_filter: String,

    /// OSM PBF extract covering at least the query area.
    pub source_pbf: PathBuf,

    /// Where the extracted source graph is cached between runs.  `None`
    /// disables caching.
    pub graph_cache: Option<PathBuf>,

    /// Destination of the node array.
    pub nodes_path: PathBuf,

    /// Destination of the edge array.
    pub edges_path: PathBuf,
}

impl ExtractConfig {
    /// 400 m of footways and paths around the University of Waterloo.
    pub fn waterloo() -> Self {
        Self {
            center:      GeoPoint::new(43.469455, -80.522522),
            radius_m:    400.0,
            path_filter: "footway|path".to_owned(),
            source_pbf:  PathBuf::from("./maps/waterloo.osm.pbf"),
            graph_cache: Some(PathBuf::from("./maps/walkable_waterloo.json")),
            nodes_path:  PathBuf::from("./graphs/nodes.json"),
            edges_path:  PathBuf::from("./graphs/edges.json"),
        }
    }

    /// Reject values no query could be built from.
    pub fn validate(&self) -> WgResult<()> {
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return Err(WgError::Config(format!(
                "radius_m must be a positive number of metres, got {}",
                self.radius_m
            )));
        }
        if !(-90.0..=90.0).contains(&self.center.lat) || !(-180.0..=180.0).contains(&self.center.lon) {
            return Err(WgError::Config(format!("center {} is not a valid WGS-84 position", self.center)));
        }
        if self.path_filter.trim().is_empty() {
            return Err(WgError::Config("path_filter must not be empty".to_owned()));
        }
        Ok(())
    }
}
