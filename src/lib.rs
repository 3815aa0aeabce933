//! # star-match
//!
//! Star Match number puzzle: a number of stars is shown, and the player
//! picks numbers from 1-9 that add up to it before the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: a `Session` is an immutable value.
//!    Every transition returns a new one, so states compare with `==`.
//!
//! 2. **Derived, not cached**: game status, overshoot and per-number
//!    statuses are computed from the snapshot on demand.
//!
//! 3. **Injected randomness**: star draws go through `RandomSource`;
//!    seeded `GameRng` streams make whole games reproducible.
//!
//! 4. **One clock per session**: the live `Game` owns a single cancellable
//!    countdown that only weakly references its session.
//!
//! ## Modules
//!
//! - `core`: Play numbers, RNG, configuration, errors
//! - `sampler`: Subset-sum sampler for the next star count
//! - `session`: Session snapshots, transitions, display views
//! - `runtime`: Live game with its countdown task
//! - `terminal`: Plain-text rendering and command parsing
//! - `logger`: Tracing subscriber setup for the binary

pub mod core;
pub mod sampler;
pub mod session;
pub mod runtime;
pub mod terminal;
pub mod logger;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, NumberSet, PlayNumber, RandomSource, Result,
    StarMatchError,
};

pub use crate::sampler::{achievable_sums, random_sum_in, sum_weights, try_random_sum_in};

pub use crate::session::{
    GameStatus, NumberStatus, NumberView, Session, SessionId, SessionView, ToggleOutcome,
};

pub use crate::runtime::{Countdown, Game};
