//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pawn and queen moves, mandatory captures
//! - `make_move.rs` - Move application and promotion
//! - `eval.rs` - Horizon scoring
//! - `text.rs` - Board text notation
//! - `search.rs` - Turn selection, chains, pruning levels
//! - `proptest.rs` - Property-based tests

mod eval;
mod movegen;

use crate::board::Board;

/// Parse a board from eight `/`-separated rows, panicking on bad input.
pub(super) fn board(text: &str) -> Board {
    Board::try_from_text(text).expect("valid board text")
}
