use once_cell::sync::Lazy;

use super::super::types::DIAGONALS;
use super::super::{Board, Color, Move, Square};

/// Diagonal rays from every square, nearest square first, indexed by
/// `[square index][direction]` in `DIAGONALS` order.
static RAYS: Lazy<Vec<[Vec<Square>; 4]>> = Lazy::new(|| {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            std::array::from_fn(|dir| {
                let (dr, dc) = DIAGONALS[dir];
                std::iter::successors(from.offset(dr, dc), |sq| sq.offset(dr, dc)).collect()
            })
        })
        .collect()
});

impl Board {
    /// Along each ray the first occupied square must hold an opposing piece;
    /// every empty square beyond it, up to the next occupied square, is a
    /// landing square. At most one piece can be captured per ray.
    pub(crate) fn queen_captures(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for ray in &RAYS[from.index()] {
            let mut captured = None;
            for &sq in ray {
                if self.is_empty(sq) {
                    if let Some(over) = captured {
                        moves.push(Move::capture(from, sq, over));
                    }
                    continue;
                }
                if captured.is_some() || color.owns(self.cell(sq)) {
                    break;
                }
                captured = Some(sq);
            }
        }
        moves
    }

    /// Slides along each ray up to the first occupied square.
    pub(crate) fn queen_slides(&self, from: Square) -> Vec<Move> {
        RAYS[from.index()]
            .iter()
            .flat_map(|ray| ray.iter().take_while(|&&sq| self.is_empty(sq)))
            .map(|&to| Move::quiet(from, to))
            .collect()
    }
}
