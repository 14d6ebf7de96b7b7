//! Knight move generation.

use super::{step_moves, MoveList};
use crate::Board;
use chess_core::{Color, Square};

/// Grouped by column: one file left, two left, one right, two right.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// Generates knight jumps onto empty or enemy-held squares.
pub fn knight_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    step_moves(board, from, us, &KNIGHT_OFFSETS, moves);
}
