//! Error types for dataset loading and zip code queries.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while building a [`ZipIndex`](crate::ZipIndex) from a dataset.
///
/// Loading is all-or-nothing: the first error aborts the load and no
/// partial index is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open dataset {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 12 tab-separated fields, found {fields}")]
    MalformedLine { line: u64, fields: usize },

    #[error("line {line}: cannot convert {value:?} to latitude")]
    InvalidLatitude { line: u64, value: String },

    #[error("line {line}: cannot convert {value:?} to longitude")]
    InvalidLongitude { line: u64, value: String },

    #[error("error while reading dataset: {0}")]
    Read(#[from] csv::Error),
}

/// The requested zip code is not present in the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("zipcode {zip_code} not found")]
pub struct NotFoundError {
    pub zip_code: String,
}

impl NotFoundError {
    pub fn new(zip_code: &str) -> Self {
        Self {
            zip_code: zip_code.to_string(),
        }
    }
}

/// Umbrella error for callers that load and query in one place.
#[derive(Debug, Error)]
pub enum ZipError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type ZipResult<T> = Result<T, ZipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = NotFoundError::new("XYZ");
        assert_eq!(err.to_string(), "zipcode XYZ not found");
    }

    #[test]
    fn test_latitude_error_names_token() {
        let err = LoadError::InvalidLatitude {
            line: 3,
            value: "WRONG".to_string(),
        };
        assert_eq!(err.to_string(), "line 3: cannot convert \"WRONG\" to latitude");
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: ZipError = NotFoundError::new("99999").into();
        assert!(matches!(err, ZipError::NotFound(ref e) if e.zip_code == "99999"));
    }
}
