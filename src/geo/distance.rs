//! Great-circle distance on a spherical earth.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

/// Earth radius used for kilometre results
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius used for mile results
pub const EARTH_RADIUS_MI: f64 = 3958.0;

/// Unit a distance is reported in. Selecting a unit only selects the
/// sphere radius; there is no conversion step afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "km"),
            DistanceUnit::Miles => write!(f, "mi"),
        }
    }
}

/// Haversine distance between two points on a sphere of `radius`.
///
/// The result is rounded to two decimals (half away from zero) and carries
/// the unit of `radius`.
pub fn distance_between_points(from: GeoPoint, to: GeoPoint, radius: f64) -> f64 {
    let lat1 = degrees_to_radians(from.lat);
    let lon1 = degrees_to_radians(from.lon);
    let lat2 = degrees_to_radians(to.lat);
    let lon2 = degrees_to_radians(to.lon);

    let a = hsin(lat2 - lat1) + lat1.cos() * lat2.cos() * hsin(lon2 - lon1);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_hundredths(c * radius)
}

// `f64::to_radians` multiplies by a pre-divided constant, which can differ
// in the last bit from `d * PI / 180`.
#[inline]
fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// sin²(θ/2)
#[inline]
fn hsin(theta: f64) -> f64 {
    (theta * 0.5).sin().powi(2)
}

#[inline]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUTEBORN: GeoPoint = GeoPoint {
        lat: 51.4167,
        lon: 13.9333,
    };

    #[test]
    fn test_short_hop_north() {
        let to = GeoPoint::new(51.4267, 13.9333);
        assert_eq!(distance_between_points(GUTEBORN, to, EARTH_RADIUS_KM), 1.11);
        assert_eq!(distance_between_points(GUTEBORN, to, EARTH_RADIUS_MI), 0.69);
    }

    #[test]
    fn test_known_pair() {
        let neuhausen = GeoPoint::new(51.7, 14.4925);
        assert_eq!(distance_between_points(GUTEBORN, neuhausen, EARTH_RADIUS_KM), 49.87);
        assert_eq!(distance_between_points(GUTEBORN, neuhausen, EARTH_RADIUS_MI), 30.98);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_between_points(GUTEBORN, GUTEBORN, EARTH_RADIUS_KM), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let berlin = GeoPoint::new(52.5323, 13.3846);
        let munich = GeoPoint::new(48.1372, 11.5755);
        let there = distance_between_points(berlin, munich, EARTH_RADIUS_KM);
        let back = distance_between_points(munich, berlin, EARTH_RADIUS_KM);
        assert_eq!(there, back);
        assert_eq!(there, 505.26);
    }

    #[test]
    fn test_antipodes() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        // Half the circumference: pi * R
        assert_eq!(distance_between_points(a, b, EARTH_RADIUS_KM), 20015.09);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_hundredths(0.125), 0.13);
        assert_eq!(round_hundredths(2.5), 2.5);
        assert_eq!(round_hundredths(1.004), 1.0);
    }

    #[test]
    fn test_unit_radius() {
        assert_eq!(DistanceUnit::Kilometers.earth_radius(), 6371.0);
        assert_eq!(DistanceUnit::Miles.earth_radius(), 3958.0);
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::Miles.to_string(), "mi");
    }
}
