//! Zipgeo - postal code lookup and distance queries over GeoNames data
//!
//! Loads a GeoNames postal code export into a read-only in-memory index and
//! answers lookups, great-circle distances and radius searches against it.
//! The `zipgeo` binary is a thin CLI over this library.

pub mod dataset;
pub mod error;
pub mod geo;
pub mod models;

pub use dataset::ZipIndex;
pub use error::{LoadError, NotFoundError, ZipError, ZipResult};
pub use geo::{distance_between_points, DistanceUnit, ZipService};
pub use models::{GeoPoint, ZipRecord};
