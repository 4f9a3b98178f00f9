#![deny(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DsnError {
    /// A required source table could not be found. Fatal: nothing is built.
    #[error("missing required table: {name}")]
    MissingTable { name: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DsnError {
    pub fn missing_table(name: impl Into<String>) -> Self {
        Self::MissingTable { name: name.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the missing-table failure.
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }
}

pub type Result<T> = std::result::Result<T, DsnError>;
