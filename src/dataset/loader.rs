//! Tab-separated dataset loader.
//!
//! # Format
//!
//! One postal code per line, 12 tab-separated columns (GeoNames export):
//!
//! ```text
//! country  zip  place  admin1  code1  admin2  code2  admin3  code3  lat  lon  accuracy
//! DE       01945 Guteborn Brandenburg BB ...                        51.4167 13.9333 4
//! ```
//!
//! Every column must be present even when empty. Blank lines are skipped.
//! A later line with an already seen zip code replaces the earlier record.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator};
use flate2::read::GzDecoder;
use hashbrown::HashMap;
use tracing::{debug, info};

use super::ZipIndex;
use crate::error::LoadError;
use crate::models::ZipRecord;

/// Number of columns in a GeoNames postal code line
pub const FIELD_COUNT: usize = 12;

const ZIP_CODE: usize = 1;
const PLACE_NAME: usize = 2;
const ADMIN_NAME: usize = 3;
const STATE_CODE: usize = 4;
const LATITUDE: usize = 9;
const LONGITUDE: usize = 10;

/// Load a dataset file into a [`ZipIndex`].
///
/// Files ending in `.gz` are decompressed on the fly. The file handle is
/// dropped on every return path, including parse failures.
pub fn load_dataset(path: &Path) -> Result<ZipIndex, LoadError> {
    debug!("Loading zip code dataset from {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader: Box<dyn Read> = if path.extension().map_or(false, |e| e == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let index = load_from_reader(reader)?;
    info!("Loaded {} zip codes from {}", index.len(), path.display());
    Ok(index)
}

/// Like [`load_dataset`] but accepts any `Read` source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<ZipIndex, LoadError> {
    // Place names may carry stray quote characters, so quoting is off and
    // field counts are validated here instead of by the csv reader. Only
    // `\n` ends a line; a lone `\r` stays inside its field.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records: HashMap<String, ZipRecord> = HashMap::new();

    for row in csv_reader.records() {
        let row = row?;
        if is_blank(&row) {
            continue;
        }
        let line = row.position().map_or(0, |p| p.line());
        let record = parse_row(&row, line)?;

        if let Some(previous) = records.insert(record.zip_code.clone(), record) {
            debug!(
                "line {}: zip code {} replaces earlier entry ({})",
                line, previous.zip_code, previous.place_name
            );
        }
    }

    Ok(ZipIndex::from_records(records))
}

/// A line holding nothing but the `\r` of a CRLF ending
fn is_blank(row: &StringRecord) -> bool {
    row.len() == 1 && (row[0].is_empty() || &row[0] == "\r")
}

/// Validate one split line and build its record
fn parse_row(row: &StringRecord, line: u64) -> Result<ZipRecord, LoadError> {
    if row.len() != FIELD_COUNT {
        return Err(LoadError::MalformedLine {
            line,
            fields: row.len(),
        });
    }

    let raw_lat = &row[LATITUDE];
    let latitude: f64 = raw_lat.parse().map_err(|_| LoadError::InvalidLatitude {
        line,
        value: raw_lat.to_string(),
    })?;

    let raw_lon = &row[LONGITUDE];
    let longitude: f64 = raw_lon.parse().map_err(|_| LoadError::InvalidLongitude {
        line,
        value: raw_lon.to_string(),
    })?;

    Ok(ZipRecord {
        zip_code: row[ZIP_CODE].to_string(),
        place_name: row[PLACE_NAME].to_string(),
        admin_name: row[ADMIN_NAME].to_string(),
        state_code: row[STATE_CODE].to_string(),
        latitude,
        longitude,
    })
}
