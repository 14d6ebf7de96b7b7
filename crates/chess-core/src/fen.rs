//! FEN (Forsyth-Edwards Notation) piece placement parsing and serialization.
//!
//! Only the placement and active color fields carry meaning here. Castling,
//! en passant and clock fields are accepted after them and ignored.

use crate::{BoardView, Color, Piece, PieceError, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error(transparent)]
    UnknownPiece(#[from] PieceError),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Decoded grid, indexed `[row][col]` with row 0 = rank 8.
    pub placement: [[Option<Piece>; 8]; 8],
    /// Side to move; White when the field is absent.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let active_color = match parts.get(1) {
            None | Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            placement,
            active_color,
        })
    }

    fn parse_placement(placement: &str) -> Result<[[Option<Piece>; 8]; 8], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut grid = [[None; 8]; 8];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c)?;
                    if col < 8 {
                        grid[row][col] = Some(piece);
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(grid)
    }

    /// Serializes the piece placement of any board.
    pub fn placement_string<B: BoardView + ?Sized>(board: &B) -> String {
        let mut fen = String::new();

        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match board.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen
    }

    /// Converts the parsed FEN back to a "placement color" string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            Self::placement_string(&self.placement),
            self.active_color.to_fen_char()
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.placement[0][4],
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            fen.placement[7][3],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            fen.placement[6][0],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(fen.placement[4][4], None);
    }

    #[test]
    fn placement_only_defaults_to_white() {
        let fen = FenParser::parse("8/8/8/8/4R3/8/8/8").unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.placement[4][4],
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn roundtrip() {
        let original = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b";
        let parsed = FenParser::parse(original).unwrap();
        assert_eq!(parsed.to_fen(), original);
    }

    #[test]
    fn trailing_fields_ignored() {
        let parsed = FenParser::parse("8/8/8/8/8/8/8/8 b KQkq e3 0 1").unwrap();
        assert_eq!(parsed.active_color, Color::Black);
        assert_eq!(parsed.to_fen(), "8/8/8/8/8/8/8/8 b");
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            FenParser::parse(""),
            Err(FenError::InvalidPartCount(0))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn unknown_piece_kind() {
        assert_eq!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w"),
            Err(FenError::UnknownPiece(PieceError::UnknownPieceKind('X')))
        );
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("7/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_parser_default() {
        let fen = FenParser::default();
        assert_eq!(fen.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(9);
        assert!(format!("{}", err).contains("9"));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::UnknownPiece(PieceError::UnknownPieceKind('z'));
        assert!(format!("{}", err).contains("'z'"));
    }
}
