//! Game configuration.
//!
//! `GameConfig` carries the few knobs a Star Match game has. Front-ends
//! build one with the `with_*` builder methods or load it from TOML:
//!
//! ```toml
//! starting_seconds = 10
//! tick_interval_ms = 1000
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Result, StarMatchError};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock when a session starts.
    pub starting_seconds: u32,

    /// Milliseconds between countdown ticks.
    pub tick_interval_ms: u64,

    /// Seed for the star draws. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_seconds: 10,
            tick_interval_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting time.
    #[must_use]
    pub fn with_starting_seconds(mut self, seconds: u32) -> Self {
        self.starting_seconds = seconds;
        self
    }

    /// Set the countdown period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Fix the seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Countdown period as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.starting_seconds == 0 {
            return Err(StarMatchError::ConfigError {
                message: "starting_seconds must be at least 1".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(StarMatchError::ConfigError {
                message: "tick_interval_ms must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_seconds, 10);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_starting_seconds(30)
            .with_tick_interval(Duration::from_millis(250))
            .with_seed(7);

        assert_eq!(config.starting_seconds, 30);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_zero_time() {
        let config = GameConfig::new().with_starting_seconds(0);
        assert!(matches!(config.validate(), Err(StarMatchError::ConfigError { .. })));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = GameConfig::from_toml_str("starting_seconds = 12
star_bound = 30
").unwrap();
        assert_eq!(config, GameConfig::new().with_starting_seconds(12));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("starting_seconds = 20\nseed = 3\n").unwrap();
        assert_eq!(config.starting_seconds, 20);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tick_interval_ms, 1000);
    }

    #[test]
    fn test_invalid_toml() {
        let err = GameConfig::from_toml_str("starting_seconds = \"ten\"").unwrap_err();
        assert!(matches!(err, StarMatchError::ConfigParse(_)));

        let err = GameConfig::from_toml_str("tick_interval_ms = 0").unwrap_err();
        assert!(matches!(err, StarMatchError::ConfigError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_seconds = 15").unwrap();
        writeln!(file, "tick_interval_ms = 500").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.starting_seconds, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, StarMatchError::IoError(_)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
