//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_turn, Board, BoardBuilder, BoardParseError, Color, Engine, Move, MoveSet,
    Optimization, Piece, ScoringMode, SearchParams, Square, Turn,
};
