//! Core types for chess.
//!
//! This crate provides the value types shared by the engine and its tools:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for row/column board coordinates
//! - [`Move`] for a single piece transfer, with its snapshot of the board
//! - FEN piece placement parsing

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::{BoardView, Move, MoveError};
pub use piece::{Piece, PieceError, PieceKind};
pub use square::{Square, SquareError};
