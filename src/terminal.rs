//! Plain-text front-end: draws a `SessionView` and parses typed commands.
//!
//! ```text
//! Pick 1 or more numbers that sum to the number of stars
//!
//! * * * * *
//!
//! [1] (2) [3]  .  [5] [6] [7] [8] [9]
//!
//! Time Remaining: 7
//! ```
//!
//! `[n]` available, `(n)` candidate, `!n!` wrong, ` . ` used.

use crate::session::{GameStatus, NumberStatus, NumberView, SessionView};

pub const HELP: &str = "Pick 1 or more numbers that sum to the number of stars";
pub const PROMPT: &str = "Type 1-9 to toggle a number, n for a new game, q to quit.";

/// A line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Toggle(u8),
    NewGame,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "n" | "new" => Command::NewGame,
            "q" | "quit" => Command::Quit,
            _ => match line.parse::<u8>() {
                Ok(value) => Command::Toggle(value),
                Err(_) => Command::Unknown(line.to_string()),
            },
        }
    }
}

/// Message shown in place of the stars once a game is over.
#[must_use]
pub fn end_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Active => None,
        GameStatus::Won => Some("Nice."),
        GameStatus::Lost => Some("Game Over"),
    }
}

fn number_cell(view: &NumberView) -> String {
    match view.status {
        NumberStatus::Available => format!("[{}]", view.number),
        NumberStatus::Candidate => format!("({})", view.number),
        NumberStatus::Wrong => format!("!{}!", view.number),
        NumberStatus::Used => " . ".to_string(),
    }
}

/// Render a full frame.
#[must_use]
pub fn render(view: &SessionView) -> String {
    let middle = match (view.star_count, end_message(view.status)) {
        (_, Some(message)) => format!("{}\nPlay Again? (n)", message),
        (Some(stars), None) => vec!["*"; usize::from(stars)].join(" "),
        (None, None) => String::new(),
    };
    let pad: Vec<String> = view.numbers.iter().map(number_cell).collect();

    [
        HELP.to_string(),
        middle,
        pad.join(" "),
        format!("Time Remaining: {}", view.seconds_left),
    ]
    .join("\n\n")
}
