//! Error types for generation runs.
//!
//! Only table-level problems are errors. A single flag whose syntax cannot be
//! classified is reported in the [`GenerationReport`](crate::GenerationReport)
//! and never aborts a run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A file could not be read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The description table is not valid JSON for the expected shape.
    #[error("invalid description table '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
