//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing board text.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(6, 4), Color::White, Piece::Pawn)
//!     .piece(Square(5, 5), Color::Black, Piece::Pawn)
//!     .piece(Square(1, 1), Color::Black, Piece::Pawn)
//!     .build();
//! assert_eq!(board.count(Color::Black), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::initial();
        let mut builder = Self::new();
        for color in Color::BOTH {
            for sq in board.pieces(color) {
                builder.pieces.push((sq, color, Piece::Pawn));
            }
        }
        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Place several pieces of the same kind.
    #[must_use]
    pub fn pieces(mut self, squares: &[Square], color: Color, piece: Piece) -> Self {
        for &sq in squares {
            self = self.piece(sq, color, piece);
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the final `Board`.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.put(sq, color, piece);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Pawn)
            .piece(Square(3, 3), Color::Black, Piece::Queen)
            .build();
        assert_eq!(board.piece_at(Square(3, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.count(Color::White), 0);
    }

    #[test]
    fn starting_position_matches_initial() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::initial());
    }

    #[test]
    fn clear_removes_piece() {
        let board = BoardBuilder::starting_position().clear(Square(5, 0)).build();
        assert_eq!(board.count(Color::White), 11);
    }
}
