//! King move generation.

use super::{step_moves, MoveList};
use crate::Board;
use chess_core::{Color, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates single steps to adjacent squares not held by `us`.
///
/// Squares attacked by the opponent are not excluded, and castling is not
/// generated.
pub fn king_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    step_moves(board, from, us, &KING_OFFSETS, moves);
}
