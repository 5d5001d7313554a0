use super::constants::{EQUAL_BOUND_NUDGE, INITIAL_ALPHA, INITIAL_BETA};
use super::Engine;
use crate::board::eval::{LOSS_SCORE, WIN_SCORE};
use crate::board::{Board, Color, Square};

impl Engine {
    /// Minimax below the engine's own turn.
    ///
    /// `depth` counts completed turns after the root; odd depths belong to
    /// the first mover (maximizing), even depths to the opponent
    /// (minimizing). A capture keeps the same side and depth and continues
    /// from the landing square; depth advances only when the side's turn is
    /// over. A side without legal moves has lost.
    pub(super) fn minimax(
        &mut self,
        board: Board,
        color: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        chain_from: Option<Square>,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == self.params.max_depth {
            self.stats.evaluations += 1;
            let first_mover = if depth % 2 == 1 { color } else { color.opposite() };
            return board.evaluate(first_mover, self.params.scoring);
        }

        let moves = match chain_from {
            Some(from) => board.generate_piece_moves(from),
            None => board.generate_moves(color, &mut self.rng),
        };

        if chain_from.is_some() && !moves.has_captures() {
            return self.minimax(board, color.opposite(), depth + 1, alpha, beta, None);
        }

        let maximizing = depth % 2 == 1;
        if moves.is_empty() {
            return if maximizing { LOSS_SCORE } else { WIN_SCORE };
        }

        let captures = moves.has_captures();
        let optimization = self.params.optimization;
        let mut min_score = INITIAL_BETA;
        let mut max_score = INITIAL_ALPHA;

        for mv in moves {
            let next = board.apply_move(mv);
            let score = if captures {
                self.minimax(next, color, depth, alpha, beta, Some(mv.to))
            } else {
                self.minimax(next, color.opposite(), depth + 1, alpha, beta, None)
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);

            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }

            if optimization.prunes() && alpha > beta {
                self.stats.cutoffs += 1;
                break;
            }
            // Lossy: fractional scores can differ by less than the nudge.
            if optimization.cuts_on_equal_bounds() && alpha == beta {
                self.stats.cutoffs += 1;
                return if maximizing {
                    max_score + EQUAL_BOUND_NUDGE
                } else {
                    min_score - EQUAL_BOUND_NUDGE
                };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}
