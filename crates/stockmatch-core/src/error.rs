use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog dataset.
///
/// A "no match" search outcome is not an error and never surfaces here.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
