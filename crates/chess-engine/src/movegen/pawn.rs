//! Pawn move generation.

use super::{push_move, MoveList};
use crate::Board;
use chess_core::{Color, Square};

/// Generates pawn pushes and diagonal captures.
///
/// The double push is only considered once the single-push square is known
/// to be empty. Captures are tried forward-left, then forward-right, and only
/// onto enemy pieces. There is no en passant and no promotion.
pub fn pawn_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    let forward = us.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            push_move(board, from, one, moves);

            if from.row() == us.pawn_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        push_move(board, from, two, moves);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(forward, d_col) {
            if matches!(board.get(to), Some(piece) if piece.color != us) {
                push_move(board, from, to, moves);
            }
        }
    }
}
