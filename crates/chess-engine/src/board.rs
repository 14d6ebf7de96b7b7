//! The 8x8 board grid.

use chess_core::{BoardView, Color, FenError, FenParser, Piece, PieceKind, Square};
use std::fmt;

/// Back rank order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fixed 8x8 grid of squares, each empty or holding one piece.
///
/// Indexed by [`Square`]; row 0 is Black's back rank. Piece counts are not
/// validated, so any arrangement (including several kings) is allowed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board from a grid indexed `[row][col]`.
    pub const fn from_rows(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Board { squares }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in [Color::Black, Color::White] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Creates a board from the placement field of a FEN string.
    ///
    /// The active color is ignored; see [`crate::GameState::from_fen`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Board::from_rows(parsed.placement))
    }

    /// Returns the FEN piece placement field for this board.
    pub fn to_fen(&self) -> String {
        FenParser::placement_string(&self.squares)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Overwrites the contents of a square.
    #[inline]
    pub fn set(&mut self, sq: Square, content: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = content;
    }

    /// Places a piece, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Empties a square and returns its previous contents.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Returns the raw grid, indexed `[row][col]`.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Iterates the pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().flatten().filter(|s| s.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl BoardView for Board {
    #[inline]
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.get(sq)
    }
}

impl std::ops::Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for (col, square) in squares.iter().enumerate() {
                let c = square.map_or('.', Piece::to_fen_char);
                if col < 7 {
                    write!(f, "{} ", c)?;
                } else {
                    writeln!(f, "{}", c)?;
                }
            }
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.occupied(), 32);
        assert_eq!(
            board.get(Square::new(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::new(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board[Square::new(6, 7)],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board[Square::new(1, 0)],
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Square::new(row, col)));
            }
        }
    }

    #[test]
    fn startpos_matches_fen() {
        assert_eq!(
            Board::startpos(),
            Board::from_fen(FenParser::STARTPOS).unwrap()
        );
        assert_eq!(
            Board::startpos().to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let sq = Square::new(4, 4);
        let rook = Piece::new(Color::White, PieceKind::Rook);

        board.put(sq, rook);
        assert_eq!(board.get(sq), Some(rook));
        assert_eq!(board.occupied(), 1);

        assert_eq!(board.clear(sq), Some(rook));
        assert!(board.is_empty(sq));
        assert_eq!(board.clear(sq), None);
    }

    #[test]
    fn duplicate_kings_allowed() {
        let board = Board::from_fen("k6k/8/8/8/8/8/8/K6K w").unwrap();
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn pieces_in_row_major_order() {
        let board = Board::from_fen("8/8/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap();
        let white: Vec<Square> = board.pieces(Color::White).map(|(sq, _)| sq).collect();
        assert_eq!(white.len(), 16);
        assert_eq!(white[0], Square::new(6, 0));
        assert_eq!(white[15], Square::new(7, 7));
        assert_eq!(board.pieces(Color::Black).count(), 0);
    }

    #[test]
    fn display_diagram() {
        let text = Board::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
