//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

/// The four diagonal directions as (row delta, col delta).
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by (`dr`, `dc`); `None` if the target is off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Square index (0-63), row-major.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// True if `other` is on one of this square's diagonals.
    #[must_use]
    pub fn same_diagonal(self, other: Square) -> bool {
        self != other && self.0.abs_diff(other.0) == self.1.abs_diff(other.1)
    }

    /// True if `mid` lies strictly between `self` and `other` on a diagonal.
    #[must_use]
    pub fn strictly_between(self, mid: Square, other: Square) -> bool {
        if !self.same_diagonal(other) || !self.same_diagonal(mid) || !mid.same_diagonal(other) {
            return false;
        }
        let row_between = (self.0.min(other.0) < mid.0) && (mid.0 < self.0.max(other.0));
        let col_between = (self.1.min(other.1) < mid.1) && (mid.1 < self.1.max(other.1));
        row_between && col_between
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse "row,col".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}
