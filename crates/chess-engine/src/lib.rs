//! Board state and pseudo-legal move generation.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of squares
//! - [`GameState`] - board, side to move and move log, with make/undo
//! - Per-piece move generators and the [`MoveList`] they fill
//! - Perft over make/undo
//!
//! Generated moves are pseudo-legal: nothing checks whether a move leaves
//! the mover's king capturable. Castling, en passant and promotion are not
//! generated.
//!
//! # Example
//!
//! ```
//! use chess_engine::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.valid_moves();
//! println!("Moves from starting position: {}", moves.len());
//!
//! let e4 = game.find_move("e2e4").unwrap();
//! game.make_move(e4);
//! game.undo_move();
//! assert_eq!(game, GameState::new());
//! ```

mod board;
mod game;
pub mod movegen;

pub use board::Board;
pub use game::GameState;
pub use movegen::{
    bishop_moves, generate_moves, king_moves, knight_moves, pawn_moves, piece_moves, queen_moves,
    rook_moves, MoveList,
};
