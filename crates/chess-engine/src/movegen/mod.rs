//! Move generation.
//!
//! Every generator produces pseudo-legal moves: a move is included when it
//! follows the piece's movement pattern and occupancy rules, even if it
//! leaves the mover's own king capturable.
//!
//! Generators append into a shared [`MoveList`] so that a full-board scan
//! collects every piece's moves in one pass.

mod king;
mod knight;
mod pawn;
pub mod perft;
mod sliding;

use crate::Board;
use chess_core::{Color, Move, PieceKind, Square};

pub use king::king_moves;
pub use knight::knight_moves;
pub use pawn::pawn_moves;
pub use sliding::{bishop_moves, queen_moves, rook_moves};

/// An ordered list of generated moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if a move with the same coordinates is in the list.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Returns the listed move with the same coordinates as `m`.
    ///
    /// The returned move carries the snapshot taken at generation time.
    pub fn find(&self, m: &Move) -> Option<Move> {
        self.moves.iter().copied().find(|listed| listed == m)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every pseudo-legal move for `us`.
///
/// Squares are visited in row-major order, and each piece's moves follow
/// its generator's fixed direction order, so the output is deterministic.
pub fn generate_moves(board: &Board, us: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces(us) {
        piece_moves(board, from, piece.kind, us, &mut moves);
    }
    moves
}

/// Dispatches to the generator for one piece kind.
pub fn piece_moves(board: &Board, from: Square, kind: PieceKind, us: Color, moves: &mut MoveList) {
    match kind {
        PieceKind::Pawn => pawn_moves(board, from, us, moves),
        PieceKind::Knight => knight_moves(board, from, us, moves),
        PieceKind::Bishop => bishop_moves(board, from, us, moves),
        PieceKind::Rook => rook_moves(board, from, us, moves),
        PieceKind::Queen => queen_moves(board, from, us, moves),
        PieceKind::King => king_moves(board, from, us, moves),
    }
}

/// Records `from -> to`, snapshotting both squares.
#[inline]
fn push_move(board: &Board, from: Square, to: Square, moves: &mut MoveList) {
    if let Some(piece) = board.get(from) {
        moves.push(Move::with_pieces(from, to, piece, board.get(to)));
    }
}

/// Adds each offset target that is on the board and not held by `us`.
fn step_moves(board: &Board, from: Square, us: Color, offsets: &[(i8, i8)], moves: &mut MoveList) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(piece) if piece.color == us => {}
            _ => push_move(board, from, to, moves),
        }
    }
}
