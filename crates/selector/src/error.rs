//! Error types for the selector crate.

use catalog_client::CatalogError;
use thiserror::Error;

/// Errors that can occur while selecting recommendations
///
/// An empty candidate set is not an error. The only failure is the catalog
/// itself, which is passed through untouched so an upstream outage is never
/// mistaken for "nothing to recommend".
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Product catalog unavailable: {0}")]
    CollaboratorUnavailable(#[from] CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SelectionError>;
