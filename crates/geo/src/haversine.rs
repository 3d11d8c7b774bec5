//! Haversine distance calculation.
//!
//! Great-circle distance between two points given in the same datum. Mixing a
//! GPS fix with a GCJ-02 map point skews the result by the datum offset, so
//! [`distance_between`] converts one side first.

use crate::{Coordinate, Datum};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6371e3;

/// Calculates the great-circle distance between two coordinates in meters.
///
/// # Example
/// ```
/// use jianghu_geo::{distance_meters, Coordinate};
///
/// let chaotianmen = Coordinate::new(29.5690, 106.5860);
/// let jiefangbei = Coordinate::new(29.5576, 106.5770);
///
/// let meters = distance_meters(&chaotianmen, &jiefangbei);
/// assert!(meters > 1000.0 && meters < 2000.0);
/// ```
#[inline]
pub fn distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_M)
}

/// Calculates the great-circle distance between two coordinates in kilometers.
#[inline]
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Distance in meters between points expressed in different datums.
///
/// `to` is moved into `from_datum` before measuring.
pub fn distance_between(from: &Coordinate, from_datum: Datum, to: &Coordinate, to_datum: Datum) -> f64 {
    let to = Datum::convert(*to, to_datum, from_datum);
    distance_meters(from, &to)
}

/// Formats a distance for display: whole meters up to 1 km, then kilometers
/// with one decimal. Halfway tenths round up, matching the JS map screen.
///
/// # Example
/// ```
/// use jianghu_geo::format_distance;
///
/// assert_eq!(format_distance(420.4), "420m");
/// assert_eq!(format_distance(1000.0), "1000m");
/// assert_eq!(format_distance(1534.0), "1.5km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters > 1000.0 {
        format!("{:.1}km", (meters / 100.0).round() / 10.0)
    } else {
        format!("{}m", meters.round())
    }
}

fn haversine_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (phi1, lambda1) = from.to_radians();
    let (phi2, lambda2) = to.to_radians();

    let d_phi = phi2 - phi1;
    let d_lambda = lambda2 - lambda1;

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}
