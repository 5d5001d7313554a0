use super::super::types::DIAGONALS;
use super::super::{Board, Color, Move, Square};

impl Board {
    /// Jumps over an adjacent opposing piece onto the empty square behind it.
    /// Pawns capture in all four diagonal directions.
    pub(crate) fn pawn_captures(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (dr, dc) in DIAGONALS {
            let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
                continue;
            };
            if self.is_empty(to) && color.opposite().owns(self.cell(over)) {
                moves.push(Move::capture(from, to, over));
            }
        }
        moves
    }

    /// One diagonal step forward onto an empty square.
    pub(crate) fn pawn_steps(&self, from: Square, color: Color) -> Vec<Move> {
        let dr = color.forward();
        [-1, 1]
            .into_iter()
            .filter_map(|dc| from.offset(dr, dc))
            .filter(|&to| self.is_empty(to))
            .map(|to| Move::quiet(from, to))
            .collect()
    }
}
