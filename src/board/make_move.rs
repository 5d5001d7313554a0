use super::types::piece::{BLACK_PAWN, EMPTY, WHITE_PAWN};
use super::{Board, Move, Turn};

impl Board {
    /// Return the board after `mv`.
    ///
    /// Removes the captured piece, moves the piece and promotes a pawn that
    /// lands on its far row. `self` is left untouched.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = *self;
        if let Some(cap) = mv.captured {
            next.set(cap, EMPTY);
        }
        let mut cell = next.cell(mv.from);
        if (cell == WHITE_PAWN && mv.to.row() == 0) || (cell == BLACK_PAWN && mv.to.row() == 7) {
            cell += 2;
        }
        next.set(mv.from, EMPTY);
        next.set(mv.to, cell);
        next
    }

    /// Apply every move of `turn` in order.
    #[must_use]
    pub fn apply_turn(&self, turn: &Turn) -> Board {
        turn.iter().fold(*self, |board, &mv| board.apply_move(mv))
    }
}
