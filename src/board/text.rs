//! Plain-text board notation.
//!
//! Eight rows, top (row 0) first, separated by `/` or newlines. Each row has
//! eight cells: `.` empty, `w` white pawn, `b` black pawn, `W` white queen,
//! `B` black queen.
//!
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::try_from_text(
//!     "......../......../......../......../.....b../......../....w.../........",
//! )
//! .unwrap();
//! assert_eq!(board.count(Color::White), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::types::piece;
use super::Board;

impl Board {
    /// Parse a board from text notation.
    ///
    /// Returns an error if the text does not describe exactly 8x8 known cells.
    pub fn try_from_text(text: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = text
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(BoardParseError::InvalidRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(BoardParseError::InvalidRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                board.cells[row][col] =
                    piece::from_char(c).ok_or(BoardParseError::InvalidCell { row, char: c })?;
            }
        }
        Ok(board)
    }

    /// Parse a board from text notation, falling back to an empty board on error.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::try_from_text(text).unwrap_or_else(|_| Board::empty())
    }

    /// Single-line notation with `/` row separators.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&c| piece::to_char(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &c in row {
                write!(f, "{}", piece::to_char(c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_text())
    }
}
