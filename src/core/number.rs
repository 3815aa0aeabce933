//! Play numbers and the number pool.
//!
//! ## PlayNumber
//!
//! Type-safe number in `1..=9`. The only way to build one from untrusted
//! input is `PlayNumber::new`, which validates the range.
//!
//! ## NumberSet
//!
//! Persistent ordered set of play numbers (`im::OrdSet`), used for both the
//! available pool and the candidate selection. Cloning is O(1), so session
//! snapshots can be copied freely.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::error::{Result, StarMatchError};

/// Number pool shared by the available pool and candidate selection.
pub type NumberSet = OrdSet<PlayNumber>;

/// A number the player can pick, always in `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayNumber(u8);

impl PlayNumber {
    /// Smallest play number.
    pub const MIN: u8 = 1;
    /// Largest play number.
    pub const MAX: u8 = 9;

    /// Create a play number, rejecting values outside `1..=9`.
    ///
    /// ```
    /// use star_match::core::PlayNumber;
    ///
    /// assert_eq!(PlayNumber::new(3).unwrap().value(), 3);
    /// assert!(PlayNumber::new(0).is_err());
    /// assert!(PlayNumber::new(10).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StarMatchError::InvalidNumber(value))
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all play numbers in ascending order.
    pub fn all() -> impl Iterator<Item = PlayNumber> {
        (Self::MIN..=Self::MAX).map(PlayNumber)
    }

    /// The full pool a session starts with.
    #[must_use]
    pub fn full_set() -> NumberSet {
        Self::all().collect()
    }
}

impl TryFrom<u8> for PlayNumber {
    type Error = StarMatchError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlayNumber> for u8 {
    fn from(number: PlayNumber) -> u8 {
        number.0
    }
}

impl std::fmt::Display for PlayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum a set of play numbers.
///
/// At most nine numbers of at most nine each, so `u8` cannot overflow.
#[must_use]
pub fn sum_of(numbers: &NumberSet) -> u8 {
    numbers.iter().map(|n| n.value()).sum()
}
