//! Error types for the boundary of the puzzle core.
//!
//! Transitions inside a session never fail. Errors only arise where
//! outside input enters: numbers picked by a front-end, sessions
//! built from raw parts and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarMatchError {
    #[error("play number {0} is outside 1..=9")]
    InvalidNumber(u8),

    #[error("invalid session: {message}")]
    InvalidSession { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StarMatchError>;
