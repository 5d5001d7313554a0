//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece ranks, colors and their cell-value encoding
//! - `Square` - (row, col) board coordinates
//! - `Move`, `MoveSet` and `Turn` - move representation

mod moves;
pub mod piece;
mod square;

pub use moves::{Move, MoveSet, Turn};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use square::DIAGONALS;
