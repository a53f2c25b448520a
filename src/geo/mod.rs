//! Geodesic distance and zip code queries.

mod distance;
mod service;

pub use distance::{distance_between_points, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use service::ZipService;
