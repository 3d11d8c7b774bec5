//! Coordinate utilities for the Jianghu travel guide.
//!
//! This crate provides:
//! - WGS-84 <-> GCJ-02 transforms for aligning GPS fixes with Chinese map data
//! - Haversine distances and display formatting
//! - POI record parsing and batch datum alignment with optional parallelism
//! - Alignment configuration loaded from TOML
//! - WASM bindings for the app's JavaScript layer
//!
//! # Example
//!
//! ```
//! use jianghu_geo::{gcj02_to_wgs84, wgs84_to_gcj02};
//!
//! let gcj = wgs84_to_gcj02(29.5690, 106.5860); // Chaotianmen, Chongqing
//! let wgs = gcj02_to_wgs84(gcj.lat, gcj.lon);
//!
//! assert!((wgs.lat - 29.5690).abs() < 1e-3);
//! assert!((wgs.lon - 106.5860).abs() < 1e-3);
//! ```

mod datum;
mod error;
mod gcj02;
mod haversine;
pub mod batch;
pub mod config;
pub mod poi;

#[cfg(feature = "wasm")]
mod wasm;

pub use gcj02::{gcj02_to_wgs84, out_of_china, wgs84_to_gcj02, ECCENTRICITY_SQUARED, SEMI_MAJOR_AXIS};
pub use datum::Datum;
pub use haversine::{distance_between, distance_km, distance_meters, format_distance, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use batch::{align_pois, convert_all, nearest_pois, pois_within_radius, PoiDistance};
pub use config::AlignmentConfig;
pub use poi::{parse_pois, Poi, PoiId};
pub use error::{GeoError, GeoErrorCode, Result};

/// A geographic coordinate in decimal degrees.
///
/// Carries no datum of its own; callers track whether it is WGS-84 or GCJ-02.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    #[serde(alias = "latitude")]
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(alias = "longitude", alias = "lng")]
    pub lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check is applied.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both values are finite and within the usual ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Returns true if the coordinate falls outside the mainland China box,
    /// where both datums coincide.
    #[inline]
    pub fn is_out_of_china(&self) -> bool {
        out_of_china(self.lat, self.lon)
    }

    /// Treats `self` as WGS-84 and returns its GCJ-02 counterpart.
    #[inline]
    pub fn to_gcj02(&self) -> Coordinate {
        wgs84_to_gcj02(self.lat, self.lon)
    }

    /// Treats `self` as GCJ-02 and returns its approximate WGS-84 counterpart.
    #[inline]
    pub fn to_wgs84(&self) -> Coordinate {
        gcj02_to_wgs84(self.lat, self.lon)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
