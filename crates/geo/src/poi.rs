//! POI records as served by the backend `pois` table.
//!
//! Each row carries `id`, `lat`, `lon` and a free-form OSM `tags` map:
//!
//! ```json
//! {"id": 42, "lat": 29.569, "lon": 106.586, "tags": {"name": "朝天门", "tourism": "attraction"}}
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Coordinate, Result};

/// POI identifier; the backend hands out numbers, the private API strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoiId {
    /// Numeric row id
    Number(i64),
    /// Opaque string id
    Text(String),
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiId::Number(n) => write!(f, "{}", n),
            PoiId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PoiId {
    fn from(id: i64) -> Self {
        PoiId::Number(id)
    }
}

impl From<i32> for PoiId {
    fn from(id: i32) -> Self {
        PoiId::Number(i64::from(id))
    }
}

impl From<String> for PoiId {
    fn from(id: String) -> Self {
        PoiId::Text(id)
    }
}

impl From<&str> for PoiId {
    fn from(id: &str) -> Self {
        PoiId::Text(id.to_string())
    }
}

/// A point of interest shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: PoiId,
    pub lat: f64,
    pub lon: f64,
    /// OSM tags (`name`, `name:en`, `tourism`, `highway`, ...)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: BTreeMap<String, String>,
}

impl Poi {
    /// Creates a POI without tags.
    pub fn new(id: impl Into<PoiId>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            tags: BTreeMap::new(),
        }
    }

    /// Adds a tag, builder style.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Returns a copy of this POI placed at `coord`.
    pub fn with_coordinate(&self, coord: Coordinate) -> Self {
        Self {
            id: self.id.clone(),
            lat: coord.lat,
            lon: coord.lon,
            tags: self.tags.clone(),
        }
    }

    /// English name if tagged, otherwise the local name.
    pub fn name(&self) -> Option<&str> {
        self.tags
            .get("name:en")
            .or_else(|| self.tags.get("name"))
            .map(String::as_str)
    }
}

/// Parse a JSON array of POI rows.
///
/// Rows with coordinates outside the valid lat/lon ranges are skipped with a
/// warning; the rest of the payload is kept.
///
/// # Example
/// ```
/// use jianghu_geo::parse_pois;
///
/// let pois = parse_pois(r#"[
///     {"id": 1, "lat": 29.5690, "lon": 106.5860, "tags": {"name": "Chaotianmen"}},
///     {"id": "hongyadong", "lat": 29.5628, "lon": 106.5792, "tags": null}
/// ]"#).unwrap();
///
/// assert_eq!(pois.len(), 2);
/// assert_eq!(pois[0].name(), Some("Chaotianmen"));
/// assert!(pois[1].tags.is_empty());
/// ```
pub fn parse_pois(json: &str) -> Result<Vec<Poi>> {
    let rows: Vec<Poi> = serde_json::from_str(json)?;
    let total = rows.len();

    let pois: Vec<Poi> = rows
        .into_iter()
        .filter(|poi| {
            let valid = poi.coordinate().is_valid();
            if !valid {
                tracing::warn!(id = %poi.id, lat = poi.lat, lon = poi.lon, "Skipping POI with invalid coordinate");
            }
            valid
        })
        .collect();

    tracing::debug!(count = pois.len(), skipped = total - pois.len(), "Parsed POI rows");
    Ok(pois)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}
