//! Error types for the fixtures crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing fixture files
///
/// Any of these aborts the run; files that were not fully written are
/// never left behind under their final names.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A fixture file could not be created, written or moved into place
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FixtureError>;
