//! Deterministic random number generation for star draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical star sequences
//! - **Forkable**: Each new session gets an independent, reproducible stream
//! - **Substitutable**: The sampler only sees the `RandomSource` trait
//!
//! ```
//! use star_match::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let stars = rng.gen_inclusive(1, 9);
//! assert!((1..=9).contains(&stars));
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.gen_inclusive(1, 9), stars);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source over an inclusive range.
///
/// Everything that draws randomness in this crate takes a `RandomSource`
/// rather than reaching for a global generator, so tests can script it.
pub trait RandomSource {
    /// Return an integer uniformly chosen from `[min, max]`, both edges included.
    ///
    /// Callers guarantee `min <= max`.
    fn gen_inclusive(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_inclusive(&mut self, min: usize, max: usize) -> usize {
        (**self).gen_inclusive(min, max)
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, min: usize, max: usize) -> usize {
        self.inner.gen_range(min..=max)
    }
}
