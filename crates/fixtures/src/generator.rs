//! Synthetic catalog and advertisement generation.
//!
//! The shape of the output is fixed (ids, category universe, value ranges);
//! the content (names, prices, category assignment) is random on every run.

use rand::Rng;
use rand::seq::index;

use crate::types::*;

/// Number of products in the generated catalog
pub const NUM_PRODUCTS: usize = 1000;

/// Size of the category universe
pub const NUM_CATEGORIES: usize = 50;

/// Upper bound on categories assigned to one product
pub const MAX_CATEGORIES_PER_PRODUCT: usize = 3;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Product id for the zero-based `index` ("0001" for index 0)
pub fn product_id(index: usize) -> ProductId {
    format!("{:04x}", index + 1)
}

/// Category id for the zero-based `index` ("cat_0000" for index 0)
pub fn category_id(index: usize) -> CategoryId {
    format!("cat_{:04x}", index)
}

/// Generate the standard fixture set: 1000 products over 50 categories.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Fixtures {
    generate_with(rng, NUM_PRODUCTS, NUM_CATEGORIES)
}

/// Generate fixtures with a custom catalog size and category universe.
///
/// ## Algorithm
/// 1. For each product, pick 1-3 distinct categories uniformly at random
/// 2. Record the product under each of its categories
/// 3. Emit one ad per (category, product-in-category) pair, with every
///    category present in the index even when it ended up empty
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, num_products: usize, num_categories: usize) -> Fixtures {
    let mut products = Vec::with_capacity(num_products);
    let mut pids_by_category: Vec<Vec<ProductId>> = vec![Vec::new(); num_categories];

    for i in 0..num_products {
        let pid = product_id(i);
        let categories = pick_categories(rng, num_categories);
        for &category in &categories {
            pids_by_category[category].push(pid.clone());
        }

        products.push(FixtureProduct {
            name: random_str(rng, 8),
            description: random_str(rng, 20),
            picture: format!("/static/img/products/{}.jpg", pid),
            price_usd: PriceUsd {
                currency_code: "USD".to_string(),
                units: rng.random_range(10..=100),
                nanos: rng.random_range(200_000_000..1_000_000_000),
            },
            categories: categories.into_iter().map(category_id).collect(),
            id: pid,
        });
    }

    let ads = pids_by_category
        .into_iter()
        .enumerate()
        .map(|(i, pids)| {
            let entries = pids
                .into_iter()
                .map(|pid| AdEntry {
                    redirect_url: format!("/product/{}", pid),
                    text: random_str(rng, 16),
                })
                .collect();
            (category_id(i), entries)
        })
        .collect();

    Fixtures {
        catalog: Catalog { products },
        ads,
    }
}

fn pick_categories<R: Rng + ?Sized>(rng: &mut R, num_categories: usize) -> Vec<usize> {
    if num_categories == 0 {
        return Vec::new();
    }
    let count = rng
        .random_range(1..=MAX_CATEGORIES_PER_PRODUCT)
        .min(num_categories);
    index::sample(rng, num_categories, count).into_vec()
}

fn random_str<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}
