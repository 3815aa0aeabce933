//! Derived statuses: the game as a whole and each number on the pad.

use serde::{Deserialize, Serialize};

use crate::core::NumberSet;

/// Overall game status.
///
/// `Won` and `Lost` are terminal: once a session reaches either, no
/// transition moves it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    /// Evaluate the status from pool and clock.
    ///
    /// An empty pool wins regardless of the clock.
    #[must_use]
    pub fn evaluate(available: &NumberSet, seconds_left: u32) -> Self {
        if available.is_empty() {
            GameStatus::Won
        } else if seconds_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Display status of a single number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatus {
    /// In the pool, not selected.
    Available,
    /// Already matched, out of play.
    Used,
    /// Selected, and the selection overshoots the stars.
    Wrong,
    /// Selected, selection does not overshoot.
    Candidate,
}
