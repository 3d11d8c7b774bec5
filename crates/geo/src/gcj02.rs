//! WGS-84 <-> GCJ-02 coordinate transformation.
//!
//! GCJ-02 is the datum mandated for maps inside mainland China. It is WGS-84
//! plus a deterministic, position-dependent offset of a few hundred metres.
//! The offset functions below are empirical; their polynomial and sinusoidal
//! terms and the order of every floating-point operation must stay exactly as
//! they are, or outputs drift away from what the map layer was tuned against.
//!
//! The inverse is a single-step approximation: the forward offset is computed
//! at the GCJ-02 point itself and subtracted. Residual error is metre-level.

use std::f64::consts::PI;

use crate::Coordinate;

/// Semi-major axis of the Krasovsky ellipsoid used by GCJ-02, in metres.
pub const SEMI_MAJOR_AXIS: f64 = 6378245.0;

/// First eccentricity squared of the same ellipsoid.
#[allow(clippy::excessive_precision)]
pub const ECCENTRICITY_SQUARED: f64 = 0.00669342162296594323;

/// Bounding box approximating mainland China: (min, max) longitude.
const CHINA_LON_RANGE: (f64, f64) = (72.004, 137.8347);

/// Bounding box approximating mainland China: (min, max) latitude.
const CHINA_LAT_RANGE: (f64, f64) = (0.8293, 55.8271);

/// Returns true when the point lies outside the mainland China bounding box.
///
/// The comparisons are strict, so points exactly on an edge count as inside.
/// NaN compares false against every edge and is therefore treated as inside.
#[inline]
pub fn out_of_china(lat: f64, lon: f64) -> bool {
    lon < CHINA_LON_RANGE.0
        || lon > CHINA_LON_RANGE.1
        || lat < CHINA_LAT_RANGE.0
        || lat > CHINA_LAT_RANGE.1
}

/// Latitude offset noise, in metres before ellipsoid scaling.
///
/// `x` and `y` are longitude and latitude relative to (105, 35).
fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += ((20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0) / 3.0;
    ret += ((20.0 * (y * PI).sin() + 40.0 * ((y / 3.0) * PI).sin()) * 2.0) / 3.0;
    ret += ((160.0 * ((y / 12.0) * PI).sin() + 320.0 * ((y * PI) / 30.0).sin()) * 2.0) / 3.0;
    ret
}

/// Longitude offset noise, in metres before ellipsoid scaling.
fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += ((20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0) / 3.0;
    ret += ((20.0 * (x * PI).sin() + 40.0 * ((x / 3.0) * PI).sin()) * 2.0) / 3.0;
    ret += ((150.0 * ((x / 12.0) * PI).sin() + 300.0 * ((x / 30.0) * PI).sin()) * 2.0) / 3.0;
    ret
}

/// Offset (in degrees) that GCJ-02 adds to a WGS-84 point inside China.
#[inline]
fn gcj02_offset(lat: f64, lon: f64) -> (f64, f64) {
    let d_lat = transform_lat(lon - 105.0, lat - 35.0);
    let d_lon = transform_lon(lon - 105.0, lat - 35.0);

    let rad_lat = (lat / 180.0) * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - ECCENTRICITY_SQUARED * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0)
        / (((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQUARED)) / (magic * sqrt_magic)) * PI);
    let d_lon = (d_lon * 180.0) / ((SEMI_MAJOR_AXIS / sqrt_magic) * rad_lat.cos() * PI);

    (d_lat, d_lon)
}

/// Converts a WGS-84 (GPS) position to GCJ-02.
///
/// Points outside mainland China are returned unchanged.
///
/// # Example
/// ```
/// use jianghu_geo::wgs84_to_gcj02;
///
/// // Chaotianmen, Chongqing
/// let gcj = wgs84_to_gcj02(29.5690, 106.5860);
/// assert!((gcj.lat - 29.5661).abs() < 1e-4);
/// assert!((gcj.lon - 106.5897).abs() < 1e-4);
///
/// // Berlin is outside China and passes through
/// let berlin = wgs84_to_gcj02(52.5200, 13.4050);
/// assert_eq!((berlin.lat, berlin.lon), (52.5200, 13.4050));
/// ```
pub fn wgs84_to_gcj02(lat: f64, lon: f64) -> Coordinate {
    if out_of_china(lat, lon) {
        return Coordinate::new(lat, lon);
    }

    let (d_lat, d_lon) = gcj02_offset(lat, lon);
    Coordinate::new(lat + d_lat, lon + d_lon)
}

/// Converts a GCJ-02 position back to WGS-84 (approximately).
///
/// The forward offset is evaluated at the GCJ-02 point as if it were WGS-84
/// and subtracted once. This is not an exact inverse; round trips land within
/// a few metres of the original point.
///
/// # Example
/// ```
/// use jianghu_geo::{gcj02_to_wgs84, wgs84_to_gcj02};
///
/// let gcj = wgs84_to_gcj02(29.5690, 106.5860);
/// let wgs = gcj02_to_wgs84(gcj.lat, gcj.lon);
/// assert!((wgs.lat - 29.5690).abs() < 1e-3);
/// assert!((wgs.lon - 106.5860).abs() < 1e-3);
/// ```
pub fn gcj02_to_wgs84(lat: f64, lon: f64) -> Coordinate {
    if out_of_china(lat, lon) {
        return Coordinate::new(lat, lon);
    }

    let gcj = wgs84_to_gcj02(lat, lon);
    let d_lat = gcj.lat - lat;
    let d_lon = gcj.lon - lon;
    Coordinate::new(lat - d_lat, lon - d_lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CHAOTIANMEN: (f64, f64) = (29.5690, 106.5860);

    #[test]
    fn test_known_point_snapshot() {
        let gcj = wgs84_to_gcj02(CHAOTIANMEN.0, CHAOTIANMEN.1);
        assert!((gcj.lat - 29.56610954099925).abs() < 1e-9, "lat: {}", gcj.lat);
        assert!((gcj.lon - 106.58968595210904).abs() < 1e-9, "lon: {}", gcj.lon);
    }

    #[test]
    fn test_other_city_snapshots() {
        // Tiananmen, Beijing
        let gcj = wgs84_to_gcj02(39.9087, 116.3975);
        assert!((gcj.lat - 39.91010349934476).abs() < 1e-9);
        assert!((gcj.lon - 116.40374357265176).abs() < 1e-9);

        // Shenzhen
        let gcj = wgs84_to_gcj02(22.5431, 114.0579);
        assert!((gcj.lat - 22.54038281422246).abs() < 1e-9);
        assert!((gcj.lon - 114.06301399856547).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_chaotianmen() {
        let gcj = wgs84_to_gcj02(CHAOTIANMEN.0, CHAOTIANMEN.1);
        let wgs = gcj02_to_wgs84(gcj.lat, gcj.lon);
        assert!((wgs.lat - CHAOTIANMEN.0).abs() < 1e-3);
        assert!((wgs.lon - CHAOTIANMEN.1).abs() < 1e-3);
        // approximate, not exact
        assert_ne!(wgs.lat, CHAOTIANMEN.0);
    }

    #[test]
    fn test_inverse_subtracts_forward_offset() {
        let (lat, lon) = (29.56610954099925, 106.58968595210904);
        let forward = wgs84_to_gcj02(lat, lon);
        let inverse = gcj02_to_wgs84(lat, lon);
        assert_eq!(inverse.lat, lat - (forward.lat - lat));
        assert_eq!(inverse.lon, lon - (forward.lon - lon));
    }

    #[test]
    fn test_offset_noise_at_origin() {
        assert_eq!(transform_lat(0.0, 0.0), -100.0);
        assert_eq!(transform_lon(0.0, 0.0), 300.0);
    }

    #[test]
    fn test_bounding_box_edges() {
        assert!(!out_of_china(29.5690, 72.004));
        assert!(out_of_china(29.5690, 72.003));
        assert!(!out_of_china(29.5690, 137.8347));
        assert!(out_of_china(29.5690, 137.8348));
        assert!(!out_of_china(0.8293, 106.0));
        assert!(out_of_china(0.8292, 106.0));
        assert!(!out_of_china(55.8271, 106.0));
        assert!(out_of_china(55.8272, 106.0));
    }

    #[test]
    fn test_edge_points_are_transformed() {
        let on_edge = wgs84_to_gcj02(29.5690, 72.004);
        assert_ne!(on_edge.lon, 72.004);

        let past_edge = wgs84_to_gcj02(29.5690, 72.003);
        assert_eq!((past_edge.lat, past_edge.lon), (29.5690, 72.003));
    }

    #[test]
    fn test_outside_china_passthrough() {
        for (lat, lon) in [(52.5200, 13.4050), (40.7128, -74.0060), (35.6762, 139.6503), (-33.8688, 151.2093)] {
            let gcj = wgs84_to_gcj02(lat, lon);
            assert_eq!((gcj.lat, gcj.lon), (lat, lon));
            let wgs = gcj02_to_wgs84(lat, lon);
            assert_eq!((wgs.lat, wgs.lon), (lat, lon));
        }
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let gcj = wgs84_to_gcj02(f64::NAN, 106.5860);
        assert!(gcj.lat.is_nan());

        let gcj = wgs84_to_gcj02(29.5690, f64::INFINITY);
        assert_eq!(gcj.lon, f64::INFINITY);
        assert_eq!(gcj.lat, 29.5690);
    }

    proptest! {
        #[test]
        fn prop_outside_longitude_is_identity(lat in -90.0f64..90.0, lon in 137.8348f64..180.0) {
            let gcj = wgs84_to_gcj02(lat, lon);
            prop_assert_eq!((gcj.lat, gcj.lon), (lat, lon));
            let wgs = gcj02_to_wgs84(lat, lon);
            prop_assert_eq!((wgs.lat, wgs.lon), (lat, lon));
        }

        #[test]
        fn prop_southern_hemisphere_is_identity(lat in -90.0f64..0.8292, lon in -180.0f64..180.0) {
            let gcj = wgs84_to_gcj02(lat, lon);
            prop_assert_eq!((gcj.lat, gcj.lon), (lat, lon));
        }

        #[test]
        fn prop_mainland_offsets_are_small(lat in 18.0f64..45.0, lon in 75.0f64..135.0) {
            let gcj = wgs84_to_gcj02(lat, lon);
            prop_assert!((gcj.lat - lat).abs() < 0.01);
            prop_assert!((gcj.lon - lon).abs() < 0.01);
        }

        #[test]
        fn prop_mainland_round_trip(lat in 18.0f64..45.0, lon in 75.0f64..135.0) {
            let gcj = wgs84_to_gcj02(lat, lon);
            let wgs = gcj02_to_wgs84(gcj.lat, gcj.lon);
            prop_assert!((wgs.lat - lat).abs() < 1e-3);
            prop_assert!((wgs.lon - lon).abs() < 1e-3);
        }

        #[test]
        fn prop_deterministic(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let a = wgs84_to_gcj02(lat, lon);
            let b = wgs84_to_gcj02(lat, lon);
            prop_assert_eq!(a.lat.to_bits(), b.lat.to_bits());
            prop_assert_eq!(a.lon.to_bits(), b.lon.to_bits());

            let a = gcj02_to_wgs84(lat, lon);
            let b = gcj02_to_wgs84(lat, lon);
            prop_assert_eq!(a.lat.to_bits(), b.lat.to_bits());
            prop_assert_eq!(a.lon.to_bits(), b.lon.to_bits());
        }
    }
}
