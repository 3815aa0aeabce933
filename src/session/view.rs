//! Display data handed to a rendering front-end.

use serde::Serialize;
use smallvec::SmallVec;

use super::state::{Session, SessionId};
use super::status::{GameStatus, NumberStatus};
use crate::core::PlayNumber;

/// One button on the number pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NumberView {
    pub number: PlayNumber,
    pub status: NumberStatus,
}

/// Everything a front-end needs to draw a session.
///
/// `star_count` is `None` once the game is over; front-ends show the
/// play-again prompt instead of stars then.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub star_count: Option<u8>,
    pub numbers: SmallVec<[NumberView; 9]>,
    pub seconds_left: u32,
    pub status: GameStatus,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let status = session.status();
        Self {
            session_id: session.id(),
            star_count: (!status.is_terminal()).then(|| session.stars()),
            numbers: session
                .number_statuses()
                .into_iter()
                .map(|(number, status)| NumberView { number, status })
                .collect(),
            seconds_left: session.seconds_left(),
            status,
        }
    }
}
