//! Core data models for postal code lookups.

pub mod zip_record;

pub use zip_record::{GeoPoint, ZipRecord};
