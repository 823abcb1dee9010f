//! Error types for the invocation adapter.

use selector::SelectionError;
use thiserror::Error;

/// Errors surfaced at the invocation boundary
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The caller named an operation this service does not implement
    #[error("Unknown method: {0}")]
    UnknownOperation(String),

    /// The runtime asked for a function this binary does not host
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Malformed {operation} request: {source}")]
    MalformedRequest {
        operation: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ServiceError>;
