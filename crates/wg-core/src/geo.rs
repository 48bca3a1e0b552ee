//! Geographic coordinate types and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude so coordinates copied from the
//! source extract survive into the JSON output without rounding.

/// Mean Earth radius in metres, as used for bounding boxes and lengths.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Bounding box extending `radius_m` metres north, south, east and west
    /// of this point.
    ///
    /// The longitude span is widened by `1 / cos(lat)` so the box is roughly
    /// square on the ground.
    pub fn bbox_around(self, radius_m: f64) -> BBox {
        let d_lat = (radius_m / EARTH_RADIUS_M).to_degrees();
        let d_lon = d_lat / self.lat.to_radians().cos();
        BBox {
            min_lat: self.lat - d_lat,
            max_lat: self.lat + d_lat,
            min_lon: self.lon - d_lon,
            max_lon: self.lon + d_lon,
        }
    }

    /// The same position as an `(x, y)` = `(lon, lat)` pair.
    #[inline]
    pub fn to_lon_lat(self) -> LonLat {
        LonLat(self.lon, self.lat)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// One vertex of an edge geometry, `(longitude, latitude)`.
///
/// Serializes as a two-element JSON array `[lon, lat]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat(pub f64, pub f64);

impl LonLat {
    #[inline]
    pub fn lon(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.1
    }
}

impl From<GeoPoint> for LonLat {
    fn from(p: GeoPoint) -> Self {
        p.to_lon_lat()
    }
}

/// Axis-aligned lat/lon rectangle, inclusive on all sides.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BBox {
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat)
            && (self.min_lon..=self.max_lon).contains(&p.lon)
    }
}
