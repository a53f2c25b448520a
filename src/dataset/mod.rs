//! GeoNames postal code dataset ingestion.
//!
//! Parses the tab-separated export into a read-only [`ZipIndex`].

mod index;
mod loader;

pub use index::ZipIndex;
pub use loader::{load_dataset, load_from_reader, FIELD_COUNT};
