//! Recommendation selection for the product catalog.
//!
//! This crate provides:
//! - `candidate_set` for removing excluded products from the catalog
//! - `sample_without_replacement` for bounded uniform sampling
//! - `RecommendationSelector`, which ties both to a catalog collaborator
//!
//! ## Architecture
//! Each request is handled in stages:
//! 1. Fetch the full catalog from the collaborator (the only await point)
//! 2. Remove excluded ids to get the candidate set
//! 3. Sample up to `MAX_RESPONSES` candidates uniformly at random
//!
//! Nothing is cached between requests; the catalog is fetched on every call.
//!
//! ## Example Usage
//! ```ignore
//! use selector::RecommendationSelector;
//! use catalog_client::CatalogClient;
//! use std::sync::Arc;
//!
//! let catalog = CatalogClient::connect("http://localhost:3550").await?;
//! let selector = RecommendationSelector::new(Arc::new(catalog));
//!
//! let product_ids = selector.select(&excluded_ids).await?;
//! ```

pub mod candidates;
pub mod error;
pub mod sampling;
pub mod selector;

// Re-export main types
pub use candidates::candidate_set;
pub use error::{Result, SelectionError};
pub use sampling::sample_without_replacement;
pub use selector::{MAX_RESPONSES, RecommendationSelector};
