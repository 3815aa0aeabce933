//! Live game: the current session, its countdown, and the star RNG.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::Notify;
use tracing::{debug, info, warn};

use super::countdown::Countdown;
use crate::core::{GameConfig, GameRng, PlayNumber, Result};
use crate::session::{Session, SessionId, SessionView, ToggleOutcome};

/// A playable game.
///
/// Front-ends read snapshots with `snapshot`/`view`, forward clicks to
/// `toggle_number`, and call `start_new_game` for the play-again button.
/// Ticks arrive on their own; `changed` resolves after each one.
///
/// Must live inside a `tokio::task::LocalSet`: the countdown runs as a
/// local task on the same thread as every other mutation.
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    session_rng: GameRng,
    session: Rc<RefCell<Session>>,
    countdown: Option<Countdown>,
    changed: Rc<Notify>,
}

impl Game {
    /// Validate `config` and start the first session.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `tokio::task::LocalSet`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut session_rng = rng.fork();
        let session = Session::new(SessionId::FIRST, &config, &mut session_rng);

        let mut game = Self {
            config,
            rng,
            session_rng,
            session: Rc::new(RefCell::new(session)),
            countdown: None,
            changed: Rc::new(Notify::new()),
        };
        game.start_countdown();
        Ok(game)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Display data for the current session.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from(&*self.session.borrow())
    }

    /// A countdown is scheduled for the current session.
    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.countdown.as_ref().is_some_and(|c| !c.is_finished())
    }

    /// Wait for the next tick-driven change.
    pub async fn changed(&self) {
        self.changed.notified().await;
    }

    /// Shared handle to the change notifier, for select loops that also
    /// need `&mut self`.
    #[must_use]
    pub fn change_notifier(&self) -> Rc<Notify> {
        Rc::clone(&self.changed)
    }

    /// Player clicked `value`.
    ///
    /// Values outside `1..=9` are rejected. Clicks on used numbers or a
    /// finished game are ignored.
    pub fn toggle_number(&mut self, value: u8) -> Result<ToggleOutcome> {
        let number = PlayNumber::new(value).inspect_err(|_| {
            warn!(value, "rejected play number");
        })?;

        let (next, outcome) = self.session.borrow().toggle_number(number, &mut self.session_rng);

        match &outcome {
            ToggleOutcome::Ignored => debug!(%number, "toggle ignored"),
            ToggleOutcome::Selected | ToggleOutcome::Deselected => {
                debug!(%number, candidate_sum = next.candidate_sum(), stars = next.stars(), "toggled");
            }
            ToggleOutcome::Matched { retired } => {
                info!(
                    session = %next.id(),
                    retired = retired.len(),
                    remaining = next.available().len(),
                    stars = next.stars(),
                    "match"
                );
            }
        }

        let won = matches!(outcome, ToggleOutcome::Matched { .. }) && !next.is_active();
        *self.session.borrow_mut() = next;

        if won {
            if let Some(countdown) = self.countdown.take() {
                countdown.cancel();
            }
            info!("all numbers matched, game won");
        }

        Ok(outcome)
    }

    /// Throw the current session away and start a fresh one.
    ///
    /// The pending countdown is cancelled before the next session exists.
    pub fn start_new_game(&mut self) -> SessionId {
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }

        let id = self.session.borrow().id().next();
        self.session_rng = self.rng.fork();
        let session = Session::new(id, &self.config, &mut self.session_rng);

        // The old cell goes away with this assignment; its countdown is
        // already aborted and could not upgrade it anyway.
        self.session = Rc::new(RefCell::new(session));
        self.start_countdown();
        id
    }

    fn start_countdown(&mut self) {
        let session = self.session.borrow();
        info!(
            session = %session.id(),
            stars = session.stars(),
            seconds = session.seconds_left(),
            "session started"
        );
        drop(session);

        self.countdown = Some(Countdown::spawn(
            Rc::downgrade(&self.session),
            self.config.tick_interval(),
            Rc::clone(&self.changed),
        ));
    }
}
