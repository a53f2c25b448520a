//! Postal code record loaded from a GeoNames dataset line.

use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// One postal code entry.
///
/// Only the columns the queries need are kept: zip code, place name,
/// first-order admin name and code, and the coordinate. Records are never
/// mutated after the loader builds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipRecord {
    /// Postal code, the index key
    pub zip_code: String,

    /// Locality name (e.g. "Guteborn")
    pub place_name: String,

    /// First-order administrative division (state) name
    pub admin_name: String,

    /// First-order administrative division code (e.g. "BB")
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub state_code: String,

    pub latitude: f64,
    pub longitude: f64,
}

impl ZipRecord {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_record() {
        let record = ZipRecord {
            zip_code: "01945".into(),
            place_name: "Guteborn".into(),
            admin_name: "Brandenburg".into(),
            state_code: "BB".into(),
            latitude: 51.4167,
            longitude: 13.9333,
        };
        assert_eq!(record.point(), GeoPoint::new(51.4167, 13.9333));
    }

    #[test]
    fn test_empty_state_code_skipped_in_json() {
        let record = ZipRecord {
            zip_code: "1010".into(),
            place_name: "Wien".into(),
            admin_name: "Wien".into(),
            state_code: String::new(),
            latitude: 48.2077,
            longitude: 16.3705,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("state_code").is_none());
        assert_eq!(json["zip_code"], "1010");
    }
}
