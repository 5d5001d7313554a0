//! Checkers board representation and game logic.
//!
//! A board is an 8x8 grid of cell values copied on every move. Move
//! generation enforces mandatory captures and chained jumps; the search picks
//! a full turn for the automated player.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color, Engine, SearchParams};
//!
//! let board = Board::initial();
//! let moves = board.generate_moves_ordered(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let mut engine = Engine::new(SearchParams::new(3).with_no_random(true));
//! let turn = engine.find_best_turn(&board, Color::White);
//! assert_eq!(turn.len(), 1);
//! ```

mod builder;
mod error;
pub mod eval;
mod make_move;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod text;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardParseError, OptionParseError, SquareError};
pub use eval::{Material, ScoringMode, LOSS_SCORE, WIN_SCORE};
pub use state::Board;
pub use types::piece;
pub use types::{Color, Move, MoveSet, Piece, Square, Turn};

// Public API - search functions and configuration
pub use search::{
    find_best_turn, Engine, Optimization, SearchInfo, SearchLogger, SearchParams, SearchResult,
    SearchStats, StdoutLogger,
};

// Search internals for callers that inspect the decision tree
pub use search::{DecisionTree, StateId, TreeState, INITIAL_ALPHA, INITIAL_BETA, NO_RANDOM_SEED};
