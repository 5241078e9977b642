use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

/// Why a single metric could not be computed for a file.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
}

pub type Result<T> = std::result::Result<T, CountError>;
