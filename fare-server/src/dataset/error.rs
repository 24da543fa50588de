//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the fare dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened
    #[error("cannot open fare dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not readable as CSV with a header row
    #[error("malformed fare dataset: {0}")]
    Csv(#[from] csv::Error),
}
