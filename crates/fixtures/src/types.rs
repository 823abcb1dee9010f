//! Fixture data shapes.
//!
//! These mirror the JSON consumed by the other demo services, so field
//! names follow the wire format rather than Rust conventions: products use
//! camelCase keys, ad entries use snake_case keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product identifier: 4 lowercase hex digits, 1-indexed ("0001")
pub type ProductId = String;

/// Category identifier: "cat_" followed by 4 lowercase hex digits ("cat_0000")
pub type CategoryId = String;

/// Price in US dollars
///
/// `nanos` stays below 10^9 so the value is always a valid money amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUsd {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

/// One entry of `products.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub price_usd: PriceUsd,
    /// 1-3 distinct categories
    pub categories: Vec<CategoryId>,
}

/// Top-level shape of `products.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<FixtureProduct>,
}

/// One advertisement pointing at a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdEntry {
    pub redirect_url: String,
    pub text: String,
}

/// Shape of `ads.json`: every category, including empty ones, maps to its ads
pub type AdIndex = BTreeMap<CategoryId, Vec<AdEntry>>;

/// Everything the generator produces in one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub catalog: Catalog,
    pub ads: AdIndex,
}
