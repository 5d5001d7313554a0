//! Search constants.

use crate::board::eval::WIN_SCORE;

/// Starting lower bound; every real score is at least `LOSS_SCORE` (0).
pub const INITIAL_ALPHA: f64 = -1.0;

/// Starting upper bound; every real score is at most `WIN_SCORE`.
pub const INITIAL_BETA: f64 = WIN_SCORE + 1.0;

/// Seed of the move-order generator when randomness is disabled.
pub const NO_RANDOM_SEED: u64 = 0;

/// Amount by which `O2` nudges a result past the bound when alpha meets beta.
pub const EQUAL_BOUND_NUDGE: f64 = 1.0;
