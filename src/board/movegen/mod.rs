//! Move generation with mandatory captures.
//!
//! A side that can capture must capture: when any of its pieces has a jump,
//! only jumps are legal and pieces without one contribute nothing.

mod pawns;
mod queens;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Board, Color, MoveSet, Piece, Square};

impl Board {
    /// Legal moves of the piece on `from`.
    ///
    /// Captures take precedence: if the piece can jump, only its jumps are
    /// returned. An empty square yields an empty set.
    #[must_use]
    pub fn generate_piece_moves(&self, from: Square) -> MoveSet {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveSet::empty();
        };

        let captures = match piece {
            Piece::Pawn => self.pawn_captures(from, color),
            Piece::Queen => self.queen_captures(from, color),
        };
        if !captures.is_empty() {
            return MoveSet::new(captures, true);
        }

        let quiet = match piece {
            Piece::Pawn => self.pawn_steps(from, color),
            Piece::Queen => self.queen_slides(from),
        };
        MoveSet::new(quiet, false)
    }

    /// Legal moves of every piece of `color`, shuffled with `rng`.
    #[must_use]
    pub fn generate_moves<R: Rng + ?Sized>(&self, color: Color, rng: &mut R) -> MoveSet {
        let mut set = self.generate_moves_ordered(color);
        set.as_mut_slice().shuffle(rng);
        set
    }

    /// Legal moves of every piece of `color` in board order (row-major by
    /// source square).
    #[must_use]
    pub fn generate_moves_ordered(&self, color: Color) -> MoveSet {
        let mut moves = Vec::new();
        let mut captures = false;

        for from in self.pieces(color) {
            let piece_moves = self.generate_piece_moves(from);
            if piece_moves.has_captures() && !captures {
                captures = true;
                moves.clear();
            }
            if piece_moves.has_captures() == captures {
                moves.extend(piece_moves);
            }
        }

        MoveSet::new(moves, captures)
    }

    /// True if any piece of `color` has a jump available.
    #[must_use]
    pub fn has_capture(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|from| self.generate_piece_moves(from).has_captures())
    }
}
