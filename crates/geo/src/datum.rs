//! Geodetic datum tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{gcj02_to_wgs84, wgs84_to_gcj02, Coordinate, GeoError};

/// The datum a coordinate is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datum {
    /// World Geodetic System 1984, what GPS hardware reports
    #[default]
    #[serde(alias = "wgs-84", alias = "gps")]
    Wgs84,
    /// The offset datum required for maps in mainland China
    #[serde(alias = "gcj-02", alias = "mars")]
    Gcj02,
}

impl Datum {
    /// Converts `coord` from `from` into `to`.
    ///
    /// Identity when both datums match.
    ///
    /// # Example
    /// ```
    /// use jianghu_geo::{Coordinate, Datum};
    ///
    /// let gps = Coordinate::new(29.5690, 106.5860);
    /// let map = Datum::convert(gps, Datum::Wgs84, Datum::Gcj02);
    /// assert_eq!(map, gps.to_gcj02());
    /// assert_eq!(Datum::convert(gps, Datum::Wgs84, Datum::Wgs84), gps);
    /// ```
    #[inline]
    pub fn convert(coord: Coordinate, from: Datum, to: Datum) -> Coordinate {
        match (from, to) {
            (Datum::Wgs84, Datum::Gcj02) => wgs84_to_gcj02(coord.lat, coord.lon),
            (Datum::Gcj02, Datum::Wgs84) => gcj02_to_wgs84(coord.lat, coord.lon),
            _ => coord,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "wgs84",
            Datum::Gcj02 => "gcj02",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Datum {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "wgs_84" | "gps" => Ok(Datum::Wgs84),
            "gcj02" | "gcj-02" | "gcj_02" | "mars" => Ok(Datum::Gcj02),
            other => Err(GeoError::UnknownDatum(other.to_string())),
        }
    }
}
