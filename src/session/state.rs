//! Session snapshots and their transitions.
//!
//! A `Session` is an immutable value. `tick` and `toggle_number` return a
//! new session and leave the receiver untouched, so two snapshots can be
//! compared with `==` and an old one kept around costs nothing (the number
//! sets are `im` persistent sets).
//!
//! Everything a front-end shows that is not stored here is derived on
//! demand: the game status, whether the candidates overshoot, and each
//! number's display status. Match detection is likewise recomputed from
//! the candidate sum on every toggle rather than tracked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::status::{GameStatus, NumberStatus};
use crate::core::{sum_of, GameConfig, NumberSet, PlayNumber, RandomSource, Result, StarMatchError};
use crate::sampler::{achievable_sums, random_sum_in};

/// Identity of a session. A restart always gets a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The id of the first session a game creates.
    pub const FIRST: SessionId = SessionId(1);

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// What a toggle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Session not active or number already used. Nothing changed.
    Ignored,
    /// Number added to the candidates without completing a match.
    Selected,
    /// Number removed from the candidates.
    Deselected,
    /// Candidates summed to the stars and left the pool.
    Matched {
        /// Numbers retired by this match.
        retired: NumberSet,
    },
}

/// Largest star count a session ever shows.
pub const STAR_BOUND: u8 = PlayNumber::MAX;

/// One puzzle session.
///
/// Deserializing runs the same checks as [`Session::try_from_parts`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct Session {
    id: SessionId,
    available: NumberSet,
    candidates: NumberSet,
    stars: u8,
    seconds_left: u32,
}

/// Unchecked field layout of a serialized `Session`.
#[derive(Deserialize)]
struct SessionParts {
    id: SessionId,
    available: NumberSet,
    candidates: NumberSet,
    stars: u8,
    seconds_left: u32,
}

impl TryFrom<SessionParts> for Session {
    type Error = StarMatchError;

    fn try_from(parts: SessionParts) -> Result<Self> {
        Session::try_from_parts(
            parts.id,
            parts.available,
            parts.candidates,
            parts.stars,
            parts.seconds_left,
        )
    }
}

impl Session {
    /// Start a session with the full pool and a fresh star count in `1..=9`.
    ///
    /// The clock starts at `config.starting_seconds`. A config that failed
    /// `GameConfig::validate` with zero seconds yields a session that is
    /// already lost.
    pub fn new<R: RandomSource + ?Sized>(id: SessionId, config: &GameConfig, rng: &mut R) -> Self {
        let stars = rng.gen_inclusive(usize::from(PlayNumber::MIN), usize::from(STAR_BOUND)) as u8;
        Self {
            id,
            available: PlayNumber::full_set(),
            candidates: NumberSet::new(),
            stars,
            seconds_left: config.starting_seconds,
        }
    }

    /// Build a session from explicit parts, checking that it is playable.
    ///
    /// While numbers remain, the candidates must come from the pool and
    /// `stars` must be in `1..=9` and reachable as the sum of some of the
    /// remaining numbers. A won session (empty pool) keeps whatever star
    /// count it ended on.
    pub fn try_from_parts(
        id: SessionId,
        available: NumberSet,
        candidates: NumberSet,
        stars: u8,
        seconds_left: u32,
    ) -> Result<Self> {
        if !candidates.is_subset(&available) {
            return Err(StarMatchError::InvalidSession {
                message: "candidates must be drawn from the available pool".to_string(),
            });
        }
        if !available.is_empty() {
            if !(1..=STAR_BOUND).contains(&stars) {
                return Err(StarMatchError::InvalidSession {
                    message: format!("star count must be in 1..={}, got {}", STAR_BOUND, stars),
                });
            }
            let pool: SmallVec<[u8; 9]> = available.iter().map(|n| n.value()).collect();
            if !achievable_sums(&pool, stars).contains(&stars) {
                return Err(StarMatchError::InvalidSession {
                    message: format!("star count {} is not a sum of {:?}", stars, pool.as_slice()),
                });
            }
        }

        Ok(Self {
            id,
            available,
            candidates,
            stars,
            seconds_left,
        })
    }

    /// Build a session from explicit parts.
    ///
    /// # Panics
    ///
    /// Panics wherever [`Session::try_from_parts`] returns an error.
    #[must_use]
    pub fn from_parts(
        id: SessionId,
        available: NumberSet,
        candidates: NumberSet,
        stars: u8,
        seconds_left: u32,
    ) -> Self {
        match Self::try_from_parts(id, available, candidates, stars, seconds_left) {
            Ok(session) => session,
            Err(err) => panic!("{}", err),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Numbers not yet matched.
    #[must_use]
    pub fn available(&self) -> &NumberSet {
        &self.available
    }

    /// Numbers currently selected.
    #[must_use]
    pub fn candidates(&self) -> &NumberSet {
        &self.candidates
    }

    /// The sum the player has to hit.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.stars
    }

    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    // === Derived ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(&self.available, self.seconds_left)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status() == GameStatus::Active
    }

    #[must_use]
    pub fn candidate_sum(&self) -> u8 {
        sum_of(&self.candidates)
    }

    /// The selection already overshoots the stars.
    #[must_use]
    pub fn candidates_are_wrong(&self) -> bool {
        self.candidate_sum() > self.stars
    }

    #[must_use]
    pub fn number_status(&self, number: PlayNumber) -> NumberStatus {
        if !self.available.contains(&number) {
            NumberStatus::Used
        } else if self.candidates.contains(&number) {
            if self.candidates_are_wrong() {
                NumberStatus::Wrong
            } else {
                NumberStatus::Candidate
            }
        } else {
            NumberStatus::Available
        }
    }

    /// Display status of every number, 1 through 9.
    #[must_use]
    pub fn number_statuses(&self) -> SmallVec<[(PlayNumber, NumberStatus); 9]> {
        PlayNumber::all().map(|n| (n, self.number_status(n))).collect()
    }

    // === Transitions ===

    /// One second off the clock.
    ///
    /// Only an active session ticks. Ticking a won or lost session returns
    /// an equal session.
    #[must_use]
    pub fn tick(&self) -> Self {
        if !self.is_active() {
            return self.clone();
        }
        Self {
            seconds_left: self.seconds_left - 1,
            ..self.clone()
        }
    }

    /// Flip `number` in or out of the candidates and resolve a match.
    ///
    /// Ignored when the session is over or the number is already used.
    /// A match retires the candidates and, if numbers remain, redraws the
    /// stars from the new pool with `rng`.
    pub fn toggle_number<R: RandomSource + ?Sized>(
        &self,
        number: PlayNumber,
        rng: &mut R,
    ) -> (Self, ToggleOutcome) {
        if !self.is_active() || self.number_status(number) == NumberStatus::Used {
            return (self.clone(), ToggleOutcome::Ignored);
        }

        let deselecting = self.candidates.contains(&number);
        let candidates = if deselecting {
            self.candidates.without(&number)
        } else {
            self.candidates.update(number)
        };

        if sum_of(&candidates) != self.stars {
            let outcome = if deselecting {
                ToggleOutcome::Deselected
            } else {
                ToggleOutcome::Selected
            };
            return (Self { candidates, ..self.clone() }, outcome);
        }

        let available = self.available.clone().relative_complement(candidates.clone());
        let stars = if available.is_empty() {
            self.stars
        } else {
            let pool: SmallVec<[u8; 9]> = available.iter().map(|n| n.value()).collect();
            random_sum_in(&pool, STAR_BOUND, rng)
        };

        let next = Self {
            available,
            candidates: NumberSet::new(),
            stars,
            ..self.clone()
        };
        (next, ToggleOutcome::Matched { retired: candidates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn n(value: u8) -> PlayNumber {
        PlayNumber::new(value).unwrap()
    }

    fn set(values: &[u8]) -> NumberSet {
        values.iter().map(|&v| n(v)).collect()
    }

    fn session(available: &[u8], candidates: &[u8], stars: u8, seconds: u32) -> Session {
        Session::from_parts(SessionId::FIRST, set(available), set(candidates), stars, seconds)
    }

    #[test]
    fn test_new_session() {
        let mut rng = GameRng::new(42);
        let s = Session::new(SessionId::FIRST, &GameConfig::default(), &mut rng);

        assert_eq!(s.id(), SessionId::FIRST);
        assert_eq!(s.available(), &PlayNumber::full_set());
        assert!(s.candidates().is_empty());
        assert!((1..=9).contains(&s.stars()));
        assert_eq!(s.seconds_left(), 10);
        assert_eq!(s.status(), GameStatus::Active);
    }

    #[test]
    fn test_session_id_next() {
        assert_eq!(SessionId::FIRST.next(), SessionId(2));
        assert_eq!(format!("{}", SessionId(3)), "Session(3)");
    }

    #[test]
    #[should_panic(expected = "candidates must be drawn")]
    fn test_from_parts_rejects_stray_candidate() {
        session(&[1, 2], &[3], 3, 10);
    }

    #[test]
    fn test_try_from_parts_rejects_unplayable() {
        let stray = Session::try_from_parts(SessionId::FIRST, set(&[1, 2]), set(&[3]), 3, 10);
        assert!(matches!(stray, Err(StarMatchError::InvalidSession { .. })));

        let zero = Session::try_from_parts(SessionId::FIRST, set(&[1]), NumberSet::new(), 0, 10);
        assert!(matches!(zero, Err(StarMatchError::InvalidSession { .. })));

        let unreachable = Session::try_from_parts(SessionId::FIRST, set(&[5, 6]), NumberSet::new(), 4, 10);
        assert!(matches!(unreachable, Err(StarMatchError::InvalidSession { .. })));

        let too_many = Session::try_from_parts(SessionId::FIRST, PlayNumber::full_set(), NumberSet::new(), 12, 10);
        assert!(matches!(too_many, Err(StarMatchError::InvalidSession { .. })));

        let won = Session::try_from_parts(SessionId::FIRST, NumberSet::new(), NumberSet::new(), 4, 2);
        assert_eq!(won.unwrap().status(), GameStatus::Won);
    }

    #[test]
    fn test_match_on_large_numbers_redraws_within_pool() {
        let mut rng = GameRng::new(5);
        let s = session(&[5, 6, 8], &[], 5, 10);

        let (next, outcome) = s.toggle_number(n(5), &mut rng);

        assert_eq!(outcome, ToggleOutcome::Matched { retired: set(&[5]) });
        assert!([6, 8].contains(&next.stars()));
    }

    #[test]
    fn test_select_and_deselect() {
        let mut rng = GameRng::new(1);
        let s = session(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &[], 5, 10);

        let (s1, outcome) = s.toggle_number(n(2), &mut rng);
        assert_eq!(outcome, ToggleOutcome::Selected);
        assert_eq!(s1.candidates(), &set(&[2]));
        assert_eq!(s1.number_status(n(2)), NumberStatus::Candidate);

        let (s2, outcome) = s1.toggle_number(n(2), &mut rng);
        assert_eq!(outcome, ToggleOutcome::Deselected);
        assert_eq!(s2, s);
    }

    #[test]
    fn test_match_retires_and_redraws() {
        let mut rng = GameRng::new(1);
        let s = session(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &[2], 5, 10);

        let (next, outcome) = s.toggle_number(n(3), &mut rng);

        assert_eq!(outcome, ToggleOutcome::Matched { retired: set(&[2, 3]) });
        assert_eq!(next.available(), &set(&[1, 4, 5, 6, 7, 8, 9]));
        assert!(next.candidates().is_empty());
        assert!((1..=9).contains(&next.stars()));
        assert_eq!(next.number_status(n(2)), NumberStatus::Used);
        assert_eq!(next.number_status(n(3)), NumberStatus::Used);
        // Receiver untouched.
        assert_eq!(s.candidates(), &set(&[2]));
    }

    #[test]
    fn test_overshoot_marks_wrong() {
        let mut rng = GameRng::new(1);
        let s = session(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &[], 5, 10);

        let (next, outcome) = s.toggle_number(n(9), &mut rng);

        assert_eq!(outcome, ToggleOutcome::Selected);
        assert_eq!(next.available(), s.available());
        assert!(next.candidates_are_wrong());
        assert_eq!(next.number_status(n(9)), NumberStatus::Wrong);
        assert_eq!(next.number_status(n(1)), NumberStatus::Available);
    }

    #[test]
    fn test_used_number_ignored() {
        let mut rng = GameRng::new(1);
        let s = session(&[1, 4], &[], 4, 10);

        let (next, outcome) = s.toggle_number(n(2), &mut rng);
        assert_eq!(outcome, ToggleOutcome::Ignored);
        assert_eq!(next, s);
    }

    #[test]
    fn test_last_match_wins_and_keeps_stars() {
        let mut rng = GameRng::new(1);
        let s = session(&[4], &[], 4, 3);

        let (next, outcome) = s.toggle_number(n(4), &mut rng);

        assert_eq!(outcome, ToggleOutcome::Matched { retired: set(&[4]) });
        assert!(next.available().is_empty());
        assert_eq!(next.stars(), 4);
        assert_eq!(next.status(), GameStatus::Won);
    }

    #[test]
    fn test_tick_counts_down_to_lost() {
        let s = session(&[1, 2], &[], 3, 2);

        let s = s.tick();
        assert_eq!(s.seconds_left(), 1);
        assert_eq!(s.status(), GameStatus::Active);

        let s = s.tick();
        assert_eq!(s.seconds_left(), 0);
        assert_eq!(s.status(), GameStatus::Lost);

        assert_eq!(s.tick(), s);
    }

    #[test]
    fn test_won_session_does_not_tick() {
        let s = session(&[], &[], 4, 5);
        assert_eq!(s.tick(), s);
    }

    #[test]
    fn test_lost_session_ignores_toggle() {
        let mut rng = GameRng::new(1);
        let s = session(&[1, 2, 3], &[], 3, 0);

        let (next, outcome) = s.toggle_number(n(3), &mut rng);
        assert_eq!(outcome, ToggleOutcome::Ignored);
        assert_eq!(next, s);
    }

    #[test]
    fn test_number_statuses_cover_pad() {
        let s = session(&[1, 2, 3], &[1], 5, 10);
        let statuses = s.number_statuses();

        assert_eq!(statuses.len(), 9);
        assert_eq!(statuses[0], (n(1), NumberStatus::Candidate));
        assert_eq!(statuses[1], (n(2), NumberStatus::Available));
        assert_eq!(statuses[8], (n(9), NumberStatus::Used));
    }

    #[test]
    fn test_serialization() {
        let s = session(&[1, 2, 3], &[2], 3, 7);
        let json = serde_json::to_string(&s).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn test_deserialize_checks_parts() {
        let stray = r#"{"id":1,"available":[1],"candidates":[7],"stars":1,"seconds_left":10}"#;
        assert!(serde_json::from_str::<Session>(stray).is_err());

        let zero = r#"{"id":1,"available":[1],"candidates":[],"stars":0,"seconds_left":10}"#;
        assert!(serde_json::from_str::<Session>(zero).is_err());

        let ok = r#"{"id":1,"available":[1,3],"candidates":[1],"stars":4,"seconds_left":10}"#;
        let session: Session = serde_json::from_str(ok).unwrap();
        assert_eq!(session.candidate_sum(), 1);
    }
}
