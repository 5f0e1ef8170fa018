//! Ledger configuration from TOML files and environment variables.
//!
//! The configuration layer only carries the slot length; duration validation
//! stays in [`BookingLedger::new`], so `InvalidDuration` has a single source.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BookingResult;
use crate::ledger::BookingLedger;

/// Environment variable overriding the slot length.
pub const SLOT_MINUTES_ENV: &str = "TURF_SLOT_MINUTES";

/// Slot length used when no file or environment override is present.
const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(String),
    /// Configuration content could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Ledger configuration loaded from a `turf.toml` file.
///
/// ```toml
/// [ledger]
/// slot_minutes = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub ledger: LedgerSettings,
}

/// Slot settings for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSettings {
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i64,
}

fn default_slot_minutes() -> i64 {
    DEFAULT_SLOT_MINUTES
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            slot_minutes: default_slot_minutes(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerSettings::default(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `turf.toml` in the current directory, then the parent
    /// directory. Falls back to defaults when no file is found.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [PathBuf::from("turf.toml"), PathBuf::from("../turf.toml")];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from the environment.
    ///
    /// Reads `TURF_SLOT_MINUTES` when set; otherwise uses the default slot
    /// length. A set-but-unparseable value is a parse error, not a silent
    /// fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let slot_minutes = match env::var(SLOT_MINUTES_ENV) {
            Ok(raw) => raw.parse::<i64>().map_err(|_| {
                ConfigError::Parse(format!(
                    "{} must be an integer number of minutes, got '{}'",
                    SLOT_MINUTES_ENV, raw
                ))
            })?,
            Err(_) => default_slot_minutes(),
        };
        Ok(Self {
            ledger: LedgerSettings { slot_minutes },
        })
    }

    /// Build a ledger from this configuration.
    ///
    /// Duration validation happens here, in [`BookingLedger::new`].
    pub fn into_ledger(self) -> BookingResult<BookingLedger> {
        BookingLedger::new(self.ledger.slot_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[ledger]
slot_minutes = 15
"#;
        let config: LedgerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.ledger.slot_minutes, 15);
    }

    #[test]
    fn missing_slot_minutes_uses_default() {
        let config: LedgerConfig = toml::from_str("[ledger]\n").unwrap();
        assert_eq!(config.ledger.slot_minutes, 30);

        let config: LedgerConfig = toml::from_str("").unwrap();
        assert_eq!(config.ledger.slot_minutes, 30);
    }

    #[test]
    fn non_integral_slot_minutes_is_a_parse_error() {
        let toml = r#"
[ledger]
slot_minutes = 30.5
"#;
        let err = toml::from_str::<LedgerConfig>(toml).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn into_ledger_validates_the_duration() {
        let config: LedgerConfig = toml::from_str("[ledger]\nslot_minutes = -30\n").unwrap();
        assert!(config.into_ledger().is_err());

        let config: LedgerConfig = toml::from_str("[ledger]\nslot_minutes = 15\n").unwrap();
        assert_eq!(config.into_ledger().unwrap().slot_minutes(), 15);
    }
}
