//! Candidate set computation.
//!
//! The candidate set is the catalog minus whatever the caller asked us to
//! leave out. Exclusions that are not in the catalog simply match nothing.

use std::collections::HashSet;

/// Remove excluded ids from the catalog ids.
///
/// ## Algorithm
/// Builds a HashSet of the exclusions for O(1) lookups, then keeps every
/// catalog id that is not excluded. Ids repeated in the catalog are kept
/// once, in the position of their first occurrence.
pub fn candidate_set(catalog_ids: Vec<String>, excluded_ids: &[String]) -> Vec<String> {
    let excluded: HashSet<&str> = excluded_ids.iter().map(String::as_str).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(catalog_ids.len());

    catalog_ids
        .into_iter()
        .filter(|id| !excluded.contains(id.as_str()))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
