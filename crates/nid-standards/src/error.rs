//! Error types for reference data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a region code file.
#[derive(Debug, Error)]
pub enum RegionError {
    /// The reference file does not exist.
    #[error("region code file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened.
    #[error("failed to read region code file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row lacks the code column.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Rows could not be parsed.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

/// Coarse classification callers present to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionErrorKind {
    ResourceNotFound,
    MalformedSource,
}

impl RegionError {
    pub fn kind(&self) -> RegionErrorKind {
        match self {
            Self::NotFound { .. } | Self::Read { .. } => RegionErrorKind::ResourceNotFound,
            Self::MissingColumn { .. } | Self::Csv { .. } => RegionErrorKind::MalformedSource,
        }
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Result type for reference data operations.
pub type Result<T> = std::result::Result<T, RegionError>;
