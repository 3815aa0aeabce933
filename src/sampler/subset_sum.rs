//! Subset-sum enumeration and sampling.

use rustc_hash::FxHashMap;

use crate::core::RandomSource;

/// Every sum `<= max` of a non-empty subset of `pool`, one entry per subset.
///
/// Subsets are enumerated incrementally: each element extends every subset
/// recorded so far (the empty subset included). An extension whose sum goes
/// over `max` is dropped and never extended again; elements are positive,
/// so none of its supersets could come back under the bound.
///
/// The order is the enumeration order, which makes index-based sampling
/// reproducible for a given pool order.
///
/// ```
/// use star_match::sampler::achievable_sums;
///
/// // {1}, {2}, {1,2}, {3}, {1,3}  ({2,3} = 5 and {1,2,3} = 6 exceed 4)
/// assert_eq!(achievable_sums(&[1, 2, 3], 4), vec![1, 2, 3, 3, 4]);
/// ```
#[must_use]
pub fn achievable_sums(pool: &[u8], max: u8) -> Vec<u8> {
    debug_assert!(!pool.contains(&0), "pool elements must be positive");

    let max = u16::from(max);
    // Index 0 is the empty subset.
    let mut subsets: Vec<u16> = vec![0];

    for &number in pool {
        for j in 0..subsets.len() {
            let extended = subsets[j] + u16::from(number);
            if extended <= max {
                subsets.push(extended);
            }
        }
    }

    subsets.into_iter().skip(1).map(|sum| sum as u8).collect()
}

/// Number of subsets producing each achievable sum.
///
/// This is the (unnormalized) distribution `random_sum_in` draws from.
#[must_use]
pub fn sum_weights(pool: &[u8], max: u8) -> FxHashMap<u8, u32> {
    let mut weights = FxHashMap::default();
    for sum in achievable_sums(pool, max) {
        *weights.entry(sum).or_insert(0) += 1;
    }
    weights
}

/// Draw an achievable sum, or `None` when no non-empty subset fits under `max`.
pub fn try_random_sum_in<R: RandomSource + ?Sized>(pool: &[u8], max: u8, rng: &mut R) -> Option<u8> {
    let sums = achievable_sums(pool, max);
    if sums.is_empty() {
        return None;
    }
    Some(sums[rng.gen_inclusive(0, sums.len() - 1)])
}

/// Draw an achievable sum `s` with `0 < s <= max`.
///
/// Each sum is weighted by how many subsets of `pool` produce it.
///
/// # Panics
///
/// Panics if `pool` is empty or no non-empty subset sums to at most `max`.
/// Callers must not draw from an exhausted pool.
pub fn random_sum_in<R: RandomSource + ?Sized>(pool: &[u8], max: u8, rng: &mut R) -> u8 {
    let sums = achievable_sums(pool, max);
    assert!(
        !sums.is_empty(),
        "no non-empty subset of {:?} sums to at most {}",
        pool,
        max
    );
    sums[rng.gen_inclusive(0, sums.len() - 1)]
}
