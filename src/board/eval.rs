//! Horizon evaluation.
//!
//! Scores are material ratios oriented toward the side that made the first
//! move of the search: higher is better for that side.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::OptionParseError;
use super::{Board, Color, Piece};

/// Score of a position the first mover has won (the opponent has no material).
pub const WIN_SCORE: f64 = 1e9;

/// Score of a position the first mover has lost.
pub const LOSS_SCORE: f64 = 0.0;

/// Bonus per row a pawn has advanced from its own back row.
const ADVANCE_BONUS: f64 = 0.05;

/// Material formula used at the search horizon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringMode {
    /// Pawns count 1, queens 4.
    #[default]
    Number,
    /// Pawns count 1 plus an advancement bonus, queens 5.
    NumberAndPotential,
}

impl ScoringMode {
    const NAMES: &'static [&'static str] = &["Number", "NumberAndPotential"];

    /// Weight of a queen relative to a pawn.
    #[inline]
    #[must_use]
    pub const fn queen_weight(self) -> f64 {
        match self {
            ScoringMode::Number => 4.0,
            ScoringMode::NumberAndPotential => 5.0,
        }
    }

    #[inline]
    fn pawn_bonus(self, color: Color, row: usize) -> f64 {
        match self {
            ScoringMode::Number => 0.0,
            ScoringMode::NumberAndPotential => {
                let advanced = match color {
                    Color::White => 7 - row,
                    Color::Black => row,
                };
                ADVANCE_BONUS * advanced as f64
            }
        }
    }
}

impl FromStr for ScoringMode {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Number" => Ok(ScoringMode::Number),
            "NumberAndPotential" => Ok(ScoringMode::NumberAndPotential),
            other => Err(OptionParseError {
                option: "scoring type",
                found: other.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Number => write!(f, "Number"),
            ScoringMode::NumberAndPotential => write!(f, "NumberAndPotential"),
        }
    }
}

/// Per-color material tally: pawns (with any advancement bonus) and queens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    pub pawns: f64,
    pub queens: f64,
}

impl Material {
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.pawns + self.queens == 0.0
    }

    #[inline]
    #[must_use]
    pub fn weighted(self, mode: ScoringMode) -> f64 {
        self.pawns + self.queens * mode.queen_weight()
    }
}

impl Board {
    /// Weighted material of both colors, indexed by `Color::index`.
    #[must_use]
    pub fn material_tally(&self, mode: ScoringMode) -> [Material; 2] {
        let mut tally = [Material::default(); 2];
        for color in Color::BOTH {
            let entry = &mut tally[color.index()];
            for sq in self.pieces(color) {
                match self.piece_at(sq) {
                    Some((_, Piece::Queen)) => entry.queens += 1.0,
                    _ => entry.pawns += 1.0 + mode.pawn_bonus(color, sq.row()),
                }
            }
        }
        tally
    }

    /// Evaluate from the point of view of `first_mover`.
    ///
    /// Returns `WIN_SCORE` if the opponent has no pieces, `LOSS_SCORE` if
    /// `first_mover` has none, and otherwise the ratio of the first mover's
    /// weighted material to the opponent's.
    #[must_use]
    pub fn evaluate(&self, first_mover: Color, mode: ScoringMode) -> f64 {
        let tally = self.material_tally(mode);
        let own = tally[first_mover.index()];
        let opp = tally[first_mover.opposite().index()];

        if opp.is_zero() {
            return WIN_SCORE;
        }
        if own.is_zero() {
            return LOSS_SCORE;
        }
        own.weighted(mode) / opp.weighted(mode)
    }
}
