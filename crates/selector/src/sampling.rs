//! Bounded sampling without replacement.

use rand::Rng;
use rand::seq::index;

/// Draw up to `amount` items from `candidates`, uniformly and without replacement.
///
/// Every subset of size `min(amount, candidates.len())` is equally likely.
/// The returned order is the draw order; it carries no ranking.
pub fn sample_without_replacement<T, R>(candidates: Vec<T>, amount: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let amount = amount.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<T>> = candidates.into_iter().map(Some).collect();
    index::sample(rng, slots.len(), amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_bounded_by_amount() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_without_replacement((0..100).collect(), 5, &mut rng);

        assert_eq!(sample.len(), 5);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 5, "no item may be drawn twice");
        assert!(sample.iter().all(|i| (0..100).contains(i)));
    }

    #[test]
    fn test_small_pool_is_returned_whole() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sample = sample_without_replacement(vec!["a", "b", "c"], 5, &mut rng);

        sample.sort();
        assert_eq!(sample, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_pool_and_zero_amount() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample_without_replacement(Vec::<u32>::new(), 5, &mut rng).is_empty());
        assert!(sample_without_replacement(vec![1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let pool: Vec<u32> = (0..50).collect();
        let first = sample_without_replacement(pool.clone(), 5, &mut StdRng::seed_from_u64(42));
        let second = sample_without_replacement(pool, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
