//! Game session state machine.
//!
//! ## States
//!
//! - `Active`: initial; the clock runs and numbers can be toggled
//! - `Won`: the pool is empty
//! - `Lost`: the clock hit zero with numbers left
//!
//! Both end states are terminal. A restart is a brand new `Session`.
//!
//! ## Transitions
//!
//! - `Session::tick`: one second off the clock
//! - `Session::toggle_number`: select/deselect a number, resolving matches

pub mod state;
pub mod status;
pub mod view;

pub use state::{Session, SessionId, ToggleOutcome, STAR_BOUND};
pub use status::{GameStatus, NumberStatus};
pub use view::{NumberView, SessionView};
