//! Engine settings.
//!
//! Settings are read through a two-level `section` / `key` lookup. Only the
//! `Bot` section is consumed here; where the values come from (a settings
//! file, a UI) is up to the caller.

mod settings;

use std::collections::HashMap;
use std::fmt;

use crate::board::OptionParseError;

pub use settings::{BotSettings, BOT_SECTION};

/// Read-only access to settings by section and key.
pub trait SettingsLookup {
    fn lookup(&self, section: &str, key: &str) -> Option<String>;
}

impl SettingsLookup for HashMap<String, HashMap<String, String>> {
    fn lookup(&self, section: &str, key: &str) -> Option<String> {
        self.get(section).and_then(|s| s.get(key)).cloned()
    }
}

impl SettingsLookup for HashMap<(String, String), String> {
    fn lookup(&self, section: &str, key: &str) -> Option<String> {
        self.get(&(section.to_string(), key.to_string())).cloned()
    }
}

/// Error type for settings failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key is absent
    MissingKey { section: String, key: String },
    /// The key is not one this engine understands
    UnknownKey { section: String, key: String },
    /// Boolean setting that is neither true nor false
    InvalidBool { key: String, value: String },
    /// Enumerated setting with an unknown spelling
    InvalidOption(OptionParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingKey { section, key } => {
                write!(f, "Missing setting {section}.{key}")
            }
            ConfigError::UnknownKey { section, key } => {
                write!(f, "Unknown setting {section}.{key}")
            }
            ConfigError::InvalidBool { key, value } => {
                write!(f, "Setting {key} must be true or false, found '{value}'")
            }
            ConfigError::InvalidOption(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidOption(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OptionParseError> for ConfigError {
    fn from(err: OptionParseError) -> Self {
        ConfigError::InvalidOption(err)
    }
}
