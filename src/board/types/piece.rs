//! Piece and color types, and the cell-value encoding they map onto.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::OptionParseError;

/// Cell value of an empty square.
pub const EMPTY: u8 = 0;
pub const WHITE_PAWN: u8 = 1;
pub const BLACK_PAWN: u8 = 2;
pub const WHITE_QUEEN: u8 = 3;
pub const BLACK_QUEEN: u8 = 4;

/// Checkers piece ranks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    /// A promoted pawn; moves and captures along whole diagonals.
    Queen,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn is_queen(self) -> bool {
        matches!(self, Piece::Queen)
    }
}

/// Side colors.
///
/// White owns the odd cell values and advances toward row 0,
/// Black owns the even values and advances toward row 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a non-capturing pawn step.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color is promoted.
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Parity of the cell values owned by this color.
    #[inline]
    const fn parity(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn owns(self, cell: u8) -> bool {
        cell != EMPTY && cell % 2 == self.parity()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(OptionParseError {
                option: "color",
                found: s.to_string(),
                expected: &["white", "black"],
            }),
        }
    }
}

/// Encode a piece into its cell value.
#[inline]
#[must_use]
pub const fn encode(color: Color, piece: Piece) -> u8 {
    match (color, piece) {
        (Color::White, Piece::Pawn) => WHITE_PAWN,
        (Color::Black, Piece::Pawn) => BLACK_PAWN,
        (Color::White, Piece::Queen) => WHITE_QUEEN,
        (Color::Black, Piece::Queen) => BLACK_QUEEN,
    }
}

/// Decode a cell value. Returns `None` for empty (or out-of-range) cells.
#[inline]
#[must_use]
pub const fn decode(cell: u8) -> Option<(Color, Piece)> {
    match cell {
        WHITE_PAWN => Some((Color::White, Piece::Pawn)),
        BLACK_PAWN => Some((Color::Black, Piece::Pawn)),
        WHITE_QUEEN => Some((Color::White, Piece::Queen)),
        BLACK_QUEEN => Some((Color::Black, Piece::Queen)),
        _ => None,
    }
}

/// Text symbol used by the board notation.
#[must_use]
pub const fn to_char(cell: u8) -> char {
    match cell {
        WHITE_PAWN => 'w',
        BLACK_PAWN => 'b',
        WHITE_QUEEN => 'W',
        BLACK_QUEEN => 'B',
        _ => '.',
    }
}

#[must_use]
pub const fn from_char(c: char) -> Option<u8> {
    match c {
        '.' => Some(EMPTY),
        'w' => Some(WHITE_PAWN),
        'b' => Some(BLACK_PAWN),
        'W' => Some(WHITE_QUEEN),
        'B' => Some(BLACK_QUEEN),
        _ => None,
    }
}
