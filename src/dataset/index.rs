//! In-memory zip code index.

use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;

use super::loader;
use crate::error::LoadError;
use crate::models::ZipRecord;

/// Zip code to record mapping built once by the loader.
///
/// There is no mutation API: once built the index is read-only, so it can be
/// shared across threads (`&ZipIndex` or `Arc<ZipIndex>`) without locking.
#[derive(Debug, Clone, Default)]
pub struct ZipIndex {
    records: HashMap<String, ZipRecord>,
}

impl ZipIndex {
    /// Load an index from a GeoNames postal code file (`.gz` accepted)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        loader::load_dataset(path.as_ref())
    }

    /// Load an index from any reader producing the tab-separated format
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        loader::load_from_reader(reader)
    }

    pub(crate) fn from_records(records: HashMap<String, ZipRecord>) -> Self {
        Self { records }
    }

    /// Exact, byte-for-byte key lookup
    pub fn get(&self, zip_code: &str) -> Option<&ZipRecord> {
        self.records.get(zip_code)
    }

    /// Get total number of indexed zip codes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order
    pub fn records(&self) -> impl Iterator<Item = &ZipRecord> {
        self.records.values()
    }
}
