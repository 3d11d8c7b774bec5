//! Batch datum conversion and distance ranking with optional parallelism.
//!
//! The map screen loads up to a thousand POIs at once and re-ranks them on
//! every location update, so these helpers fan out over rayon when the
//! `parallel` feature is on.

use serde::{Deserialize, Serialize};

use crate::{distance_meters, Coordinate, Datum, Poi, PoiId};

/// Distance from the user to a single POI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiDistance {
    /// The POI id
    pub id: PoiId,
    /// Distance in meters (NaN if the POI coordinate is unusable)
    pub distance: f64,
}

/// Convert every coordinate from one datum to another, preserving order.
///
/// # Example
/// ```
/// use jianghu_geo::{convert_all, Coordinate, Datum};
///
/// let fixes = vec![Coordinate::new(29.5690, 106.5860), Coordinate::new(52.52, 13.405)];
/// let map = convert_all(&fixes, Datum::Wgs84, Datum::Gcj02);
///
/// assert_eq!(map[0], fixes[0].to_gcj02());
/// assert_eq!(map[1], fixes[1]); // outside China
/// ```
pub fn convert_all(coords: &[Coordinate], from: Datum, to: Datum) -> Vec<Coordinate> {
    if from == to {
        return coords.to_vec();
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        coords
            .par_iter()
            .map(|coord| Datum::convert(*coord, from, to))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        coords
            .iter()
            .map(|coord| Datum::convert(*coord, from, to))
            .collect()
    }
}

/// Move POIs from one datum into another, preserving order and tags.
pub fn align_pois(pois: &[Poi], from: Datum, to: Datum) -> Vec<Poi> {
    if from == to {
        return pois.to_vec();
    }

    tracing::debug!(count = pois.len(), %from, %to, "Aligning POIs");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pois.par_iter()
            .map(|poi| poi.with_coordinate(Datum::convert(poi.coordinate(), from, to)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pois.iter()
            .map(|poi| poi.with_coordinate(Datum::convert(poi.coordinate(), from, to)))
            .collect()
    }
}

/// Distances from `user` to each POI, closest first.
///
/// Both sides must already be in the same datum. Unusable distances (NaN)
/// sort last.
///
/// # Example
/// ```
/// use jianghu_geo::{nearest_pois, Coordinate, Poi, PoiId};
///
/// let pois = vec![
///     Poi::new(1, 29.5628, 106.5792), // Hongyadong
///     Poi::new(2, 29.5690, 106.5860), // Chaotianmen
/// ];
/// let user = Coordinate::new(29.5685, 106.5855);
///
/// let ranked = nearest_pois(&user, &pois, Some(1));
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].id, PoiId::Number(2));
/// ```
pub fn nearest_pois(user: &Coordinate, pois: &[Poi], max_results: Option<usize>) -> Vec<PoiDistance> {
    let mut results = calculate_distances(user, pois);

    sort_by_distance(&mut results);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// POIs within `radius_m` meters of `user`, closest first.
pub fn pois_within_radius(user: &Coordinate, pois: &[Poi], radius_m: f64) -> Vec<PoiDistance> {
    let mut results = calculate_distances(user, pois);

    results.retain(|r| r.distance <= radius_m);
    sort_by_distance(&mut results);

    results
}

fn calculate_distances(user: &Coordinate, pois: &[Poi]) -> Vec<PoiDistance> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pois.par_iter()
            .map(|poi| single_distance(user, poi))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pois.iter().map(|poi| single_distance(user, poi)).collect()
    }
}

#[inline]
fn single_distance(user: &Coordinate, poi: &Poi) -> PoiDistance {
    let coord = poi.coordinate();
    let distance = if coord.is_valid() {
        distance_meters(user, &coord)
    } else {
        f64::NAN
    };

    PoiDistance {
        id: poi.id.clone(),
        distance,
    }
}

fn sort_by_distance(results: &mut [PoiDistance]) {
    results.sort_by(|a, b| match (a.distance.is_nan(), b.distance.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.distance.total_cmp(&b.distance),
    });
}
