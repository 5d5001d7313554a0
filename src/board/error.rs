//! Error types for board and option parsing.

use std::fmt;

/// Error type for board text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Board text must have exactly 8 rows
    InvalidRowCount { found: usize },
    /// Every row must have exactly 8 cells
    InvalidRowLength { row: usize, found: usize },
    /// Unknown cell symbol
    InvalidCell { row: usize, char: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            BoardParseError::InvalidRowLength { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            BoardParseError::InvalidCell { row, char } => {
                write!(f, "Invalid cell '{char}' in row {row}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Not of the form "row,col"
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for an unrecognized option spelling (scoring type, optimization level)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionParseError {
    pub option: &'static str,
    pub found: String,
    pub expected: &'static [&'static str],
}

impl fmt::Display for OptionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} '{}', expected one of {}",
            self.option,
            self.found,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for OptionParseError {}
