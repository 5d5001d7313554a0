use super::types::piece::{self, EMPTY};
use super::{Color, Piece, Square};

/// An 8x8 board snapshot.
///
/// Cells hold 0 (empty), 1 (white pawn), 2 (black pawn), 3 (white queen)
/// or 4 (black queen). The snapshot is a plain value: applying a move
/// produces a new board and never touches the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[u8; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[EMPTY; 8]; 8],
        }
    }

    /// Standard opening setup: twelve pawns per side on the dark squares,
    /// Black on rows 0-2 and White on rows 5-7.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for row in 0..8 {
            for col in 0..8 {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < 3 {
                    board.cells[row][col] = piece::BLACK_PAWN;
                } else if row > 4 {
                    board.cells[row][col] = piece::WHITE_PAWN;
                }
            }
        }
        board
    }

    /// Wrap a grid supplied by the caller. Values outside 0..=4 are treated
    /// as empty by every accessor.
    #[must_use]
    pub const fn from_grid(cells: [[u8; 8]; 8]) -> Self {
        Board { cells }
    }

    #[must_use]
    pub const fn grid(&self) -> &[[u8; 8]; 8] {
        &self.cells
    }

    /// Raw cell value.
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> u8 {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1] == EMPTY
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        piece::decode(self.cell(sq))
    }

    pub(crate) fn set(&mut self, sq: Square, cell: u8) {
        self.cells[sq.0][sq.1] = cell;
    }

    /// Place a piece, replacing whatever was on the square.
    pub fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set(sq, piece::encode(color, piece));
    }

    pub fn remove(&mut self, sq: Square) {
        self.set(sq, EMPTY);
    }

    /// Squares holding pieces of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..64)
            .map(Square::from_index)
            .filter(move |&sq| color.owns(self.cell(sq)))
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// (pawns, queens) of `color`.
    #[must_use]
    pub fn material(&self, color: Color) -> (usize, usize) {
        self.pieces(color)
            .fold((0, 0), |(pawns, queens), sq| match self.piece_at(sq) {
                Some((_, Piece::Queen)) => (pawns, queens + 1),
                _ => (pawns + 1, queens),
            })
    }
}
