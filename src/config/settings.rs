#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, SettingsLookup};
use crate::board::{Optimization, ScoringMode};

/// Section holding the engine's settings.
pub const BOT_SECTION: &str = "Bot";

const NO_RANDOM: &str = "NoRandom";
const SCORING_TYPE: &str = "BotScoringType";
const OPTIMIZATION: &str = "Optimization";

/// Typed view of the `Bot` settings section.
///
/// With the `serde` feature this deserializes directly from a settings
/// object such as `{"NoRandom": true, "BotScoringType": "Number",
/// "Optimization": "O1"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct BotSettings {
    pub no_random: bool,
    #[cfg_attr(feature = "serde", serde(rename = "BotScoringType"))]
    pub scoring: ScoringMode,
    pub optimization: Optimization,
}

impl BotSettings {
    /// Read every `Bot` key from `source`. All three keys are required.
    pub fn from_lookup<S: SettingsLookup + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let mut settings = BotSettings::default();
        for key in [NO_RANDOM, SCORING_TYPE, OPTIMIZATION] {
            let value = source
                .lookup(BOT_SECTION, key)
                .ok_or_else(|| ConfigError::MissingKey {
                    section: BOT_SECTION.to_string(),
                    key: key.to_string(),
                })?;
            settings.apply(key, &value)?;
        }
        Ok(settings)
    }

    /// Update a single key of the `Bot` section.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.trim() {
            NO_RANDOM => self.no_random = parse_bool(key, value)?,
            SCORING_TYPE => self.scoring = value.parse()?,
            OPTIMIZATION => self.optimization = value.parse()?,
            other => {
                return Err(ConfigError::UnknownKey {
                    section: BOT_SECTION.to_string(),
                    key: other.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
