//! WASM bindings for the geo crate.
//!
//! These bindings expose the transforms to the app's JavaScript layer with
//! the same shape the map screen already consumes: `{ lat, lon }` objects.

use crate::{batch, distance_meters, parse_pois, Coordinate, Datum};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn to_js_object(coord: Coordinate) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &JsValue::from_str("lat"), &JsValue::from_f64(coord.lat))?;
    Reflect::set(&obj, &JsValue::from_str("lon"), &JsValue::from_f64(coord.lon))?;
    Ok(obj.into())
}

fn parse_datum(name: &str) -> Result<Datum, JsValue> {
    name.parse::<Datum>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a WGS-84 position to GCJ-02.
///
/// # Returns
/// `{ lat, lon }` object
#[wasm_bindgen(js_name = wgs84ToGcj02)]
pub fn wgs84_to_gcj02(lat: f64, lon: f64) -> Result<JsValue, JsValue> {
    to_js_object(crate::wgs84_to_gcj02(lat, lon))
}

/// Convert a GCJ-02 position to WGS-84 (approximate inverse).
///
/// # Returns
/// `{ lat, lon }` object
#[wasm_bindgen(js_name = gcj02ToWgs84)]
pub fn gcj02_to_wgs84(lat: f64, lon: f64) -> Result<JsValue, JsValue> {
    to_js_object(crate::gcj02_to_wgs84(lat, lon))
}

/// Great-circle distance in meters between two points in the same datum.
#[wasm_bindgen(js_name = distanceMeters)]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance_meters(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

/// Display label for a distance in meters ("420m", "1.5km").
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance(meters: f64) -> String {
    crate::format_distance(meters)
}

/// Move POI rows between datums.
///
/// # Arguments
/// * `pois_json` - JSON array of `{id, lat, lon, tags}` rows
/// * `from` - Datum the rows are in (`"wgs84"` or `"gcj02"`)
/// * `to` - Target datum
///
/// # Returns
/// JSON string of the aligned rows
#[wasm_bindgen(js_name = alignPois)]
pub fn align_pois(pois_json: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let pois = parse_pois(pois_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let aligned = batch::align_pois(&pois, parse_datum(from)?, parse_datum(to)?);

    serde_json::to_string(&aligned)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Rank POIs by distance from the user.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lon` - User's longitude
/// * `pois_json` - JSON array of POI rows in the user's datum
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON string of `{id, distance}` sorted closest first
#[wasm_bindgen(js_name = nearestPois)]
pub fn nearest_pois(user_lat: f64, user_lon: f64, pois_json: &str, max_results: u32) -> Result<String, JsValue> {
    let pois = parse_pois(pois_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let max = if max_results == 0 { None } else { Some(max_results as usize) };
    let results = batch::nearest_pois(&Coordinate::new(user_lat, user_lon), &pois, max);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
