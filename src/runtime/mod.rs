//! Live game driver.
//!
//! Sessions are plain values; this module gives them a clock. A `Game`
//! owns the current session, exactly one `Countdown` for it, and the RNG
//! that draws star counts. Everything runs on one thread inside a tokio
//! `LocalSet`, so ticks and clicks never interleave mid-transition.

pub mod countdown;
pub mod game;

pub use countdown::Countdown;
pub use game::Game;
