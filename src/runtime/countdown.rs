//! The one repeating timer of a live session.
//!
//! The countdown task only holds a `Weak` reference to the session cell.
//! The game owns the cell and the `Countdown` handle; dropping the handle
//! aborts the task, and a superseded cell can no longer be upgraded, so a
//! stale task can never tick a session it does not belong to.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::session::Session;

/// Handle to a running countdown. Aborts the task when dropped.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking `session` every `period`.
    ///
    /// `changed` is notified after every tick.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `tokio::task::LocalSet`.
    #[must_use]
    pub fn spawn(session: Weak<RefCell<Session>>, period: Duration, changed: Rc<Notify>) -> Self {
        let handle = tokio::task::spawn_local(run(session, period, changed));
        Self { handle }
    }

    /// The task has stopped on its own or been aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the countdown.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Still worth scheduling another tick.
fn should_tick(session: &Weak<RefCell<Session>>) -> bool {
    match session.upgrade() {
        Some(cell) => {
            let active = cell.borrow().is_active();
            active
        }
        None => false,
    }
}

async fn run(session: Weak<RefCell<Session>>, period: Duration, changed: Rc<Notify>) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // No strong reference is held across an await.
    while should_tick(&session) {
        interval.tick().await;

        let Some(cell) = session.upgrade() else {
            break;
        };
        if !cell.borrow().is_active() {
            break;
        }

        let next = cell.borrow().tick();
        debug!(session = %next.id(), seconds_left = next.seconds_left(), "tick");
        if !next.is_active() {
            info!(session = %next.id(), status = %next.status(), "out of time");
        }
        *cell.borrow_mut() = next;
        drop(cell);

        changed.notify_one();
    }

    debug!("countdown stopped");
}
