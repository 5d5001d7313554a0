use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::OptionParseError;
use crate::board::ScoringMode;
use crate::config::BotSettings;

/// Pruning aggressiveness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Optimization {
    /// No pruning: plain exhaustive minimax.
    O0,
    /// Alpha-beta cutoff once alpha exceeds beta.
    #[default]
    O1,
    /// `O1` plus an immediate return when alpha equals beta, nudged one unit
    /// past the bound. Lossy: scores are fractional, so this can change the
    /// chosen move.
    O2,
}

impl Optimization {
    const NAMES: &'static [&'static str] = &["O0", "O1", "O2"];

    #[inline]
    #[must_use]
    pub const fn prunes(self) -> bool {
        !matches!(self, Optimization::O0)
    }

    #[inline]
    #[must_use]
    pub const fn cuts_on_equal_bounds(self) -> bool {
        matches!(self, Optimization::O2)
    }
}

impl FromStr for Optimization {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O0" => Ok(Optimization::O0),
            "O1" => Ok(Optimization::O1),
            "O2" => Ok(Optimization::O2),
            other => Err(OptionParseError {
                option: "optimization level",
                found: other.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for Optimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimization::O0 => write!(f, "O0"),
            Optimization::O1 => write!(f, "O1"),
            Optimization::O2 => write!(f, "O2"),
        }
    }
}

/// Engine configuration, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched after the engine's own turn. Always at least 1.
    pub max_depth: u32,
    pub scoring: ScoringMode,
    pub optimization: Optimization,
    /// Seed the move-order generator with a fixed value.
    pub no_random: bool,
}

impl SearchParams {
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        SearchParams {
            max_depth: max_depth.max(1),
            scoring: ScoringMode::default(),
            optimization: Optimization::default(),
            no_random: false,
        }
    }

    /// Build from the `Bot` settings section. The depth is not part of the
    /// settings and must be supplied by the caller.
    #[must_use]
    pub fn from_settings(settings: &BotSettings, max_depth: u32) -> Self {
        SearchParams::new(max_depth)
            .with_scoring(settings.scoring)
            .with_optimization(settings.optimization)
            .with_no_random(settings.no_random)
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub const fn with_optimization(mut self, optimization: Optimization) -> Self {
        self.optimization = optimization;
        self
    }

    #[must_use]
    pub const fn with_no_random(mut self, no_random: bool) -> Self {
        self.no_random = no_random;
        self
    }
}
