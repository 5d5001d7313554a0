//! Search module implementing depth-limited minimax with alpha-beta pruning.
//!
//! Features:
//! - Forced captures folded into single plies: a capture chain is searched
//!   at the same depth and by the same side until the capturing piece runs
//!   out of jumps
//! - Per-turn chain maximization at the root, recorded in a flattened
//!   decision tree so the full turn can be replayed afterwards
//! - Configurable pruning (`O0` exhaustive, `O1` alpha-beta, `O2` lossy)
//! - Seeded move-order shuffling owned by the engine

mod constants;
mod log;
mod minimax;
mod params;
mod tree;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Board, Color, MoveSet, Square, Turn};
pub use constants::{INITIAL_ALPHA, INITIAL_BETA, NO_RANDOM_SEED};
pub use log::{SearchInfo, SearchLogger, StdoutLogger};
pub use params::{Optimization, SearchParams};
pub use tree::{DecisionTree, StateId, TreeState};

/// Result of a search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The chosen turn; empty if the mover has no legal move
    pub turn: Turn,
    /// Score of the chosen turn from the mover's point of view
    pub score: f64,
}

/// Statistics tracked during the last search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
    pub tree_states: usize,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// The automated player.
///
/// Owns its configuration, its move-order generator and the decision tree
/// of the search in progress.
pub struct Engine {
    params: SearchParams,
    rng: StdRng,
    tree: DecisionTree,
    stats: SearchStats,
    logger: Option<Box<dyn SearchLogger>>,
}

impl Engine {
    /// Create an engine. The move-order generator is seeded once: with
    /// `NO_RANDOM_SEED` under `no_random`, otherwise from the clock.
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let seed = if params.no_random {
            NO_RANDOM_SEED
        } else {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(NO_RANDOM_SEED, |d| d.as_secs())
        };
        Self::with_seed(params, seed)
    }

    /// Create an engine with an explicit move-order seed.
    #[must_use]
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Engine {
            params,
            rng: StdRng::seed_from_u64(seed),
            tree: DecisionTree::new(),
            stats: SearchStats::default(),
            logger: None,
        }
    }

    /// Report every completed search to `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Box<dyn SearchLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Decision tree left by the last search.
    #[must_use]
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// Legal moves of `color`, in the engine's shuffled order.
    pub fn legal_moves(&mut self, board: &Board, color: Color) -> MoveSet {
        board.generate_moves(color, &mut self.rng)
    }

    /// Legal moves of the piece on `from`.
    #[must_use]
    pub fn piece_moves(&self, board: &Board, from: Square) -> MoveSet {
        board.generate_piece_moves(from)
    }

    /// Best full turn for `color`, including every forced chained capture.
    /// Empty if `color` has no legal move.
    pub fn find_best_turn(&mut self, board: &Board, color: Color) -> Turn {
        self.search(board, color).turn
    }

    /// Search `board` for `color` and return the chosen turn with its score.
    pub fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        let start = Instant::now();
        self.tree.clear();
        self.stats.reset();

        let root = self.tree.alloc();
        let score = self.explore_turn(*board, color, None, root, INITIAL_ALPHA);
        let turn = self.tree.best_turn();
        self.stats.tree_states = self.tree.len();

        #[cfg(feature = "logging")]
        ::log::debug!(
            "{color} depth {} nodes {} evals {} score {score:.4} turn [{turn}]",
            self.params.max_depth,
            self.stats.nodes,
            self.stats.evaluations
        );

        if let Some(logger) = &self.logger {
            logger.info(&SearchInfo {
                depth: self.params.max_depth,
                nodes: self.stats.nodes,
                evaluations: self.stats.evaluations,
                cutoffs: self.stats.cutoffs,
                tree_states: self.stats.tree_states,
                score,
                time_ms: start.elapsed().as_millis(),
                turn: turn.to_string(),
            });
        }

        SearchResult { turn, score }
    }

    /// Choose the engine's own move at `state`.
    ///
    /// `chain_from` is the square of the piece that has just captured within
    /// this turn, or `None` at the start of the turn. A capture is followed
    /// into a fresh child state so the rest of the chain can be chosen on the
    /// resulting board; once the piece has no further jump the opponent's
    /// reply is searched with plain minimax.
    fn explore_turn(
        &mut self,
        board: Board,
        color: Color,
        chain_from: Option<Square>,
        state: StateId,
        alpha: f64,
    ) -> f64 {
        let moves = match chain_from {
            Some(from) => board.generate_piece_moves(from),
            None => board.generate_moves(color, &mut self.rng),
        };

        if chain_from.is_some() && !moves.has_captures() {
            return self.minimax(board, color.opposite(), 0, alpha, INITIAL_BETA, None);
        }

        let captures = moves.has_captures();
        let mut best_score = INITIAL_ALPHA;
        for mv in moves {
            let next = board.apply_move(mv);
            let (score, continuation) = if captures {
                let child = self.tree.alloc();
                let score = self.explore_turn(next, color, Some(mv.to), child, best_score);
                (score, Some(child))
            } else {
                let score = self.minimax(next, color.opposite(), 0, best_score, INITIAL_BETA, None);
                (score, None)
            };

            #[cfg(feature = "logging")]
            ::log::trace!("state {} candidate {mv} score {score:.4}", state.index());

            if score > best_score || self.tree[state].best_move.is_none() {
                best_score = score;
                self.tree.record(state, mv, continuation);
            }
        }

        best_score
    }
}

/// Convenience wrapper: build an engine from `params` and search once.
pub fn find_best_turn(board: &Board, color: Color, params: SearchParams) -> Turn {
    Engine::new(params).find_best_turn(board, color)
}
