//! Subset-sum sampler used to draw the next star count.
//!
//! Given the numbers still in play and a bound, the sampler picks a sum the
//! player can actually reach. Sums reachable by several subsets are drawn
//! proportionally more often.
//!
//! Pools never exceed nine numbers, so enumerating every subset (at most
//! 511) is cheap.

pub mod subset_sum;

pub use subset_sum::{achievable_sums, random_sum_in, sum_weights, try_random_sum_in};
