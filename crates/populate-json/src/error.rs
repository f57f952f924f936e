//! Error types for the dataset writer and verifier.

use person_generator::GeneratorError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a dataset.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// IO error on the destination.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}

impl PopulateError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attribute IO failures surfaced by the serializer to `path`.
    pub(crate) fn from_json(path: &Path, err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::io(path, err.into())
        } else {
            Self::Json(err)
        }
    }
}

/// Errors that can occur while verifying a dataset.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// IO error on the input file.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed JSON array.
    #[error("Invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl VerifyError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
