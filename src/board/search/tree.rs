//! Flattened decision tree.
//!
//! Each state records the best move found at that point of the engine's own
//! turn and, when that move is a capture, the state holding the best
//! continuation of the chain. States are stored in an arena and addressed by
//! index; state 0 is the root.

use std::ops::{Index, IndexMut};

use crate::board::{Move, Turn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    pub const ROOT: StateId = StateId(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeState {
    /// `None` until a move has been recorded.
    pub best_move: Option<Move>,
    /// Continuation of a capture chain; `None` when the turn ends here.
    pub next: Option<StateId>,
}

#[derive(Clone, Debug, Default)]
pub struct DecisionTree {
    states: Vec<TreeState>,
}

impl DecisionTree {
    #[must_use]
    pub fn new() -> Self {
        DecisionTree { states: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Append an empty state and return its id.
    pub fn alloc(&mut self) -> StateId {
        self.states.push(TreeState::default());
        StateId(self.states.len() - 1)
    }

    pub fn record(&mut self, id: StateId, mv: Move, next: Option<StateId>) {
        let state = &mut self.states[id.0];
        state.best_move = Some(mv);
        state.next = next;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Walk from the root, collecting recorded moves until a state has no
    /// continuation or the continuation recorded no move.
    #[must_use]
    pub fn best_turn(&self) -> Turn {
        let mut turn = Turn::new();
        let mut current = Some(StateId::ROOT);
        while let Some(id) = current {
            let Some(state) = self.states.get(id.0) else {
                break;
            };
            let Some(mv) = state.best_move else {
                break;
            };
            turn.push(mv);
            current = state.next;
        }
        turn
    }
}

impl Index<StateId> for DecisionTree {
    type Output = TreeState;

    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.0]
    }
}

impl IndexMut<StateId> for DecisionTree {
    fn index_mut(&mut self, id: StateId) -> &mut Self::Output {
        &mut self.states[id.0]
    }
}
