//! Move, move set and turn types.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single piece transition.
///
/// `captured` is set only for captures and always lies strictly between
/// `from` and `to` on the same diagonal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    /// Create a non-capturing move
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Create a capture that removes the piece on `captured`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} -> {}", self.from, self.to)?;
        if let Some(cap) = self.captured {
            write!(f, " x {cap}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(cap) => write!(f, "{}x{}:{}", self.from, cap, self.to),
            None => write!(f, "{}-{}", self.from, self.to),
        }
    }
}

/// Output of the move generator.
///
/// `captures` is true when the set holds capture moves only. A set with
/// `captures == false` never contains a capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
    captures: bool,
}

impl MoveSet {
    #[must_use]
    pub(crate) fn new(moves: Vec<Move>, captures: bool) -> Self {
        MoveSet { moves, captures }
    }

    #[must_use]
    pub fn empty() -> Self {
        MoveSet::default()
    }

    /// True if the moves are forced captures.
    #[inline]
    #[must_use]
    pub fn has_captures(&self) -> bool {
        self.captures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Moves starting on `from` (used for UI highlighting).
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter().filter(move |m| m.from == from)
    }
}

impl Index<usize> for MoveSet {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// One full turn: a single move, or a chain of captures by the same piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turn(Vec<Move>);

impl Turn {
    #[must_use]
    pub fn new() -> Self {
        Turn(Vec::new())
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Number of pieces removed by this turn.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.0.iter().filter(|m| m.is_capture()).count()
    }

    /// True if every move after the first starts where the previous one ended.
    #[must_use]
    pub fn is_chained(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].to == pair[1].from)
    }
}

impl From<Vec<Move>> for Turn {
    fn from(moves: Vec<Move>) -> Self {
        Turn(moves)
    }
}

impl IntoIterator for Turn {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
