//! Move representation.

use crate::{Piece, Square, SquareError};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur when building a move from board coordinates.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    OutOfRange(#[from] SquareError),

    #[error("no piece on start square {0}")]
    EmptyStart(Square),
}

/// Read access to the contents of an 8x8 board.
pub trait BoardView {
    /// Returns the piece on `sq`, or `None` if the square is empty.
    fn piece_at(&self, sq: Square) -> Option<Piece>;
}

impl BoardView for [[Option<Piece>; 8]; 8] {
    #[inline]
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self[sq.row() as usize][sq.col() as usize]
    }
}

/// A single piece transfer between two squares.
///
/// The moved and captured pieces are copied out of the board when the move
/// is built, so a move stays valid after the board changes. Two moves are
/// equal when their coordinates are equal; the pieces are not compared.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
}

impl Move {
    /// Builds a move by reading both squares of `board`.
    pub fn new<B: BoardView + ?Sized>(from: Square, to: Square, board: &B) -> Result<Self, MoveError> {
        let piece_moved = board.piece_at(from).ok_or(MoveError::EmptyStart(from))?;
        Ok(Move {
            from,
            to,
            piece_moved,
            piece_captured: board.piece_at(to),
        })
    }

    /// Builds a move from raw `(row, col)` pairs, e.g. two clicked squares.
    pub fn from_coords<B: BoardView + ?Sized>(
        start: (usize, usize),
        end: (usize, usize),
        board: &B,
    ) -> Result<Self, MoveError> {
        let from = Square::try_new(start.0, start.1)?;
        let to = Square::try_new(end.0, end.1)?;
        Self::new(from, to, board)
    }

    /// Builds a move from already-known pieces.
    #[inline]
    pub const fn with_pieces(
        from: Square,
        to: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn piece_moved(self) -> Piece {
        self.piece_moved
    }

    /// Returns what stood on the destination square before the move.
    #[inline]
    pub const fn piece_captured(self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Returns the identity key `from.row*1000 + from.col*100 + to.row*10 + to.col`.
    #[inline]
    pub const fn id(self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    /// Returns the start and end squares in algebraic notation (e.g., "e2e4").
    pub fn notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
