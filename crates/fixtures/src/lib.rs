//! # Fixtures Crate
//!
//! This crate generates the synthetic catalog and advertisement fixtures the
//! demo services load at startup.
//!
//! ## Main Components
//!
//! - **types**: JSON data shapes (FixtureProduct, PriceUsd, AdEntry, ...)
//! - **generator**: Random catalog and ad index generation
//! - **writer**: Sorted-key, 4-space JSON rendering and atomic file writes
//! - **error**: Error types for fixture generation
//!
//! ## Example Usage
//!
//! ```ignore
//! use std::path::Path;
//!
//! // Writes products.json and ads.json into the directory
//! fixtures::generate_to_dir(Path::new("data"))?;
//! ```

use std::path::Path;
use std::time::Instant;

use tracing::info;

// Public modules
pub mod error;
pub mod generator;
pub mod types;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::{FixtureError, Result};
pub use generator::{
    MAX_CATEGORIES_PER_PRODUCT, NUM_CATEGORIES, NUM_PRODUCTS, category_id, generate, generate_with,
    product_id,
};
pub use types::{AdEntry, AdIndex, Catalog, CategoryId, FixtureProduct, Fixtures, PriceUsd, ProductId};
pub use writer::{ADS_FILE, PRODUCTS_FILE, write_fixtures};

/// Generate the standard fixture set and write it into `output_dir`.
pub fn generate_to_dir(output_dir: &Path) -> Result<Fixtures> {
    let start = Instant::now();
    let fixtures = generate(&mut rand::rng());
    write_fixtures(output_dir, &fixtures)?;

    info!(
        "Generated {} products and {} ad categories in {} ({:.2?})",
        fixtures.catalog.products.len(),
        fixtures.ads.len(),
        output_dir.display(),
        start.elapsed()
    );
    Ok(fixtures)
}
