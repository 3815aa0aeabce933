//! Core types: play numbers, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! sessions or timers.

pub mod number;
pub mod rng;
pub mod config;
pub mod error;

pub use number::{sum_of, NumberSet, PlayNumber};
pub use rng::{GameRng, RandomSource};
pub use config::GameConfig;
pub use error::{Result, StarMatchError};
