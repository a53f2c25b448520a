//! Zip code query service: lookup, pairwise distance and radius search.

use std::path::Path;

use tracing::debug;

use super::distance::{distance_between_points, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
use crate::dataset::ZipIndex;
use crate::error::{LoadError, NotFoundError};
use crate::models::{GeoPoint, ZipRecord};

/// Query service over a loaded [`ZipIndex`]
#[derive(Debug, Clone)]
pub struct ZipService {
    index: ZipIndex,
}

impl ZipService {
    /// Create a new service from an index
    pub fn new(index: ZipIndex) -> Self {
        Self { index }
    }

    /// Load a dataset file and wrap it in a service
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::new(ZipIndex::load(path)?))
    }

    /// Look up a zip code. The key is matched exactly, without trimming or
    /// case folding.
    pub fn lookup(&self, zip_code: &str) -> Result<&ZipRecord, NotFoundError> {
        self.index
            .get(zip_code)
            .ok_or_else(|| NotFoundError::new(zip_code))
    }

    pub fn distance_km(&self, zip_a: &str, zip_b: &str) -> Result<f64, NotFoundError> {
        self.calculate_distance(zip_a, zip_b, EARTH_RADIUS_KM)
    }

    pub fn distance_miles(&self, zip_a: &str, zip_b: &str) -> Result<f64, NotFoundError> {
        self.calculate_distance(zip_a, zip_b, EARTH_RADIUS_MI)
    }

    /// Distance between two zip codes in the given unit
    pub fn distance(
        &self,
        zip_a: &str,
        zip_b: &str,
        unit: DistanceUnit,
    ) -> Result<f64, NotFoundError> {
        self.calculate_distance(zip_a, zip_b, unit.earth_radius())
    }

    /// Distance between two zip codes on a sphere of `radius`.
    ///
    /// `zip_a` is resolved first, so when both are missing the error names
    /// `zip_a`.
    pub fn calculate_distance(
        &self,
        zip_a: &str,
        zip_b: &str,
        radius: f64,
    ) -> Result<f64, NotFoundError> {
        let a = self.lookup(zip_a)?;
        let b = self.lookup(zip_b)?;
        Ok(distance_between_points(a.point(), b.point(), radius))
    }

    pub fn distance_km_to_point(
        &self,
        zip_code: &str,
        lat: f64,
        lon: f64,
    ) -> Result<f64, NotFoundError> {
        self.distance_to_point(zip_code, GeoPoint::new(lat, lon), DistanceUnit::Kilometers)
    }

    pub fn distance_miles_to_point(
        &self,
        zip_code: &str,
        lat: f64,
        lon: f64,
    ) -> Result<f64, NotFoundError> {
        self.distance_to_point(zip_code, GeoPoint::new(lat, lon), DistanceUnit::Miles)
    }

    /// Distance from a zip code to an arbitrary coordinate
    pub fn distance_to_point(
        &self,
        zip_code: &str,
        point: GeoPoint,
        unit: DistanceUnit,
    ) -> Result<f64, NotFoundError> {
        let record = self.lookup(zip_code)?;
        Ok(distance_between_points(
            record.point(),
            point,
            unit.earth_radius(),
        ))
    }

    pub fn zip_codes_within_km_radius(
        &self,
        zip_code: &str,
        radius_km: f64,
    ) -> Result<Vec<String>, NotFoundError> {
        self.zip_codes_within_radius(zip_code, radius_km, DistanceUnit::Kilometers)
    }

    pub fn zip_codes_within_miles_radius(
        &self,
        zip_code: &str,
        radius_mi: f64,
    ) -> Result<Vec<String>, NotFoundError> {
        self.zip_codes_within_radius(zip_code, radius_mi, DistanceUnit::Miles)
    }

    /// All other zip codes strictly closer than `max_radius` to `zip_code`.
    ///
    /// Result order is unspecified.
    pub fn zip_codes_within_radius(
        &self,
        zip_code: &str,
        max_radius: f64,
        unit: DistanceUnit,
    ) -> Result<Vec<String>, NotFoundError> {
        let origin = self.lookup(zip_code)?;
        Ok(self.find_zip_codes_within_radius(origin, max_radius, unit.earth_radius()))
    }

    /// Scan the whole index for records within `max_radius` of `origin`.
    ///
    /// `origin` itself is excluded by zip code, so a different zip code at
    /// the same coordinate is still returned.
    pub fn find_zip_codes_within_radius(
        &self,
        origin: &ZipRecord,
        max_radius: f64,
        earth_radius: f64,
    ) -> Vec<String> {
        let center = origin.point();

        let found: Vec<String> = self
            .index
            .records()
            .filter(|r| r.zip_code != origin.zip_code)
            .filter(|r| distance_between_points(center, r.point(), earth_radius) < max_radius)
            .map(|r| r.zip_code.clone())
            .collect();

        debug!(
            "Radius search around {} ({}): {} of {} zip codes within {}",
            origin.zip_code,
            center,
            found.len(),
            self.index.len(),
            max_radius
        );

        found
    }

    /// Get the underlying index
    pub fn index(&self) -> &ZipIndex {
        &self.index
    }
}
