//! Sliding piece move generation (rook, bishop, queen).

use super::{push_move, MoveList};
use crate::Board;
use chess_core::{Color, Square};

/// Up, down, left, right in board indices.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Casts one ray per direction until it leaves the board or hits a piece.
///
/// An enemy piece ends the ray as a capture; an own piece ends it before
/// that square.
fn slide(board: &Board, from: Square, us: Color, directions: &[(i8, i8)], moves: &mut MoveList) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.get(to) {
                None => push_move(board, from, to, moves),
                Some(piece) => {
                    if piece.color != us {
                        push_move(board, from, to, moves);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Generates rook moves along ranks and files.
pub fn rook_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    slide(board, from, us, &ROOK_DIRECTIONS, moves);
}

/// Generates bishop moves along diagonals.
pub fn bishop_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    slide(board, from, us, &BISHOP_DIRECTIONS, moves);
}

/// Generates queen moves: all rook moves, then all bishop moves.
pub fn queen_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    rook_moves(board, from, us, moves);
    bishop_moves(board, from, us, moves);
}
