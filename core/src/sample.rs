use alloc::vec::Vec;
use rand::Rng;
use rand::RngExt;

use crate::{GameError, Result};

/// Draws `count` distinct indices uniformly from `0..len`, by running the
/// first `count` steps of a Fisher–Yates shuffle: every size-`count` subset
/// comes out with equal probability, in uniformly random order.
///
/// A pool smaller than `count` is an error, never a short draw.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Result<Vec<usize>> {
    if count > len {
        return Err(GameError::NotEnoughItems {
            wanted: count,
            got: len,
        });
    }

    let mut pool: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.random_range(i..len);
        pool.swap(i, j);
    }
    pool.truncate(count);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn draws_exactly_count_distinct_in_range_indices() {
        let mut rng = SmallRng::seed_from_u64(7);

        let drawn = sample_indices(&mut rng, 100, 6).unwrap();

        assert_eq!(drawn.len(), 6);
        assert!(drawn.iter().all(|&i| i < 100));
        let mut unique = drawn.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn drawing_the_whole_pool_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);

        let mut drawn = sample_indices(&mut rng, 5, 5).unwrap();
        drawn.sort_unstable();

        assert_eq!(drawn, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn refuses_to_overdraw_the_pool() {
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(
            sample_indices(&mut rng, 3, 5).unwrap_err(),
            GameError::NotEnoughItems { wanted: 5, got: 3 }
        );
    }

    #[test]
    fn same_seed_draws_the_same_indices() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);

        assert_eq!(
            sample_indices(&mut a, 50, 5).unwrap(),
            sample_indices(&mut b, 50, 5).unwrap()
        );
    }
}
