//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::{align_pois, Coordinate, Datum, Poi};

/// Root alignment configuration
///
/// ```toml
/// [datums]
/// device = "gcj02"   # some domestic handsets report GCJ-02 fixes
/// poi = "wgs84"
/// tiles = "wgs84"    # CartoDB tiles
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AlignmentConfig {
    #[serde(default)]
    pub datums: DatumConfig,
}

/// Datum of each coordinate source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatumConfig {
    /// Datum of fixes reported by the device location service
    #[serde(default = "default_datum")]
    pub device: Datum,

    /// Datum POI rows are stored in
    #[serde(default = "default_datum")]
    pub poi: Datum,

    /// Datum the map tiles are drawn in
    #[serde(default = "default_datum")]
    pub tiles: Datum,
}

impl Default for DatumConfig {
    fn default() -> Self {
        Self {
            device: default_datum(),
            poi: default_datum(),
            tiles: default_datum(),
        }
    }
}

fn default_datum() -> Datum {
    Datum::default()
}

impl AlignmentConfig {
    /// Moves a device fix onto the tile datum.
    pub fn align_device_fix(&self, fix: Coordinate) -> Coordinate {
        Datum::convert(fix, self.datums.device, self.datums.tiles)
    }

    /// Moves a stored POI coordinate onto the tile datum.
    pub fn align_poi(&self, coord: Coordinate) -> Coordinate {
        Datum::convert(coord, self.datums.poi, self.datums.tiles)
    }

    /// Moves a batch of POI rows onto the tile datum.
    pub fn align_pois(&self, pois: &[Poi]) -> Vec<Poi> {
        align_pois(pois, self.datums.poi, self.datums.tiles)
    }

    /// True when either source differs from the tile datum.
    pub fn needs_transform(&self) -> bool {
        self.datums.device != self.datums.tiles || self.datums.poi != self.datums.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_wgs84() {
        let config = AlignmentConfig::default();
        assert_eq!(config.datums.device, Datum::Wgs84);
        assert_eq!(config.datums.tiles, Datum::Wgs84);
        assert!(!config.needs_transform());

        let fix = Coordinate::new(29.5690, 106.5860);
        assert_eq!(config.align_device_fix(fix), fix);
        assert_eq!(config.align_poi(fix), fix);
    }

    #[test]
    fn test_gcj02_device_on_wgs84_tiles() {
        let config = AlignmentConfig {
            datums: DatumConfig {
                device: Datum::Gcj02,
                ..DatumConfig::default()
            },
        };
        assert!(config.needs_transform());

        let gps = Coordinate::new(29.5690, 106.5860);
        let reported = gps.to_gcj02();
        let aligned = config.align_device_fix(reported);
        assert!((aligned.lat - gps.lat).abs() < 1e-3);
        assert!((aligned.lon - gps.lon).abs() < 1e-3);
        assert_eq!(aligned, reported.to_wgs84());
    }

    #[test]
    fn test_wgs84_pois_on_gcj02_tiles() {
        let config = AlignmentConfig {
            datums: DatumConfig {
                tiles: Datum::Gcj02,
                ..DatumConfig::default()
            },
        };

        let pois = vec![Poi::new(1, 29.5690, 106.5860)];
        let aligned = config.align_pois(&pois);
        assert_eq!(aligned[0].coordinate(), pois[0].coordinate().to_gcj02());
    }
}
