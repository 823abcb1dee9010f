//! # Recommendation Selector
//!
//! Answers "what should we recommend, given what to avoid" for one request:
//! 1. Fetch the full catalog from the collaborator
//! 2. Compute the candidate set (catalog minus exclusions)
//! 3. Sample up to `max_responses` candidates without replacement
//!
//! The selector holds no mutable state, so a single instance can serve any
//! number of concurrent requests without locking.

use std::sync::Arc;
use std::time::Instant;

use catalog_client::ProductCatalog;
use rand::Rng;
use tracing::debug;

use crate::candidates::candidate_set;
use crate::error::Result;
use crate::sampling::sample_without_replacement;

/// Maximum number of product ids returned per request
pub const MAX_RESPONSES: usize = 5;

/// Selects a small random subset of the catalog, skipping excluded products.
#[derive(Clone)]
pub struct RecommendationSelector {
    catalog: Arc<dyn ProductCatalog>,
    max_responses: usize,
}

impl RecommendationSelector {
    /// Create a selector backed by the given catalog collaborator.
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            catalog,
            max_responses: MAX_RESPONSES,
        }
    }

    /// Override the number of ids returned per request (builder pattern).
    pub fn with_max_responses(mut self, max_responses: usize) -> Self {
        self.max_responses = max_responses;
        self
    }

    pub fn max_responses(&self) -> usize {
        self.max_responses
    }

    /// Select recommendations using a fresh thread-local RNG.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - `min(max_responses, |catalog - excluded|)` distinct ids
    /// * `Err(CollaboratorUnavailable)` - the catalog call failed
    pub async fn select(&self, excluded_ids: &[String]) -> Result<Vec<String>> {
        let catalog_ids = self.fetch_catalog_ids().await?;

        // ThreadRng is !Send, so it must not live across the await above
        let mut rng = rand::rng();
        Ok(self.pick(catalog_ids, excluded_ids, &mut rng))
    }

    /// Same as [`select`](Self::select) but draws from the caller's RNG.
    pub async fn select_with_rng<R>(&self, excluded_ids: &[String], rng: &mut R) -> Result<Vec<String>>
    where
        R: Rng + ?Sized,
    {
        let catalog_ids = self.fetch_catalog_ids().await?;
        Ok(self.pick(catalog_ids, excluded_ids, rng))
    }

    async fn fetch_catalog_ids(&self) -> Result<Vec<String>> {
        let start = Instant::now();
        let products = self.catalog.list_products().await?;
        debug!(
            "Fetched {} products from catalog in {:.2?}",
            products.len(),
            start.elapsed()
        );
        Ok(products.into_iter().map(|p| p.id).collect())
    }

    fn pick<R>(&self, catalog_ids: Vec<String>, excluded_ids: &[String], rng: &mut R) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        let catalog_len = catalog_ids.len();
        let candidates = candidate_set(catalog_ids, excluded_ids);
        debug!(
            "Candidate set: {} of {} catalog products ({} exclusions)",
            candidates.len(),
            catalog_len,
            excluded_ids.len()
        );

        let selected = sample_without_replacement(candidates, self.max_responses, rng);
        debug!("Selected {} recommendations", selected.len());
        selected
    }
}
