//! Game state with move application and undo.
//!
//! [`GameState`] owns the board, the side to move and the log of applied
//! moves. It is mutated only through [`GameState::make_move`] and
//! [`GameState::undo_move`], which are exact inverses of each other.

use crate::movegen::generate_moves;
use crate::{Board, MoveList};
use chess_core::{Color, FenError, FenParser, Move};
use tracing::{debug, trace};

/// A board, the side to move, and the history of applied moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game in the standard starting position with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            move_log: Vec::new(),
        }
    }

    /// Creates a game from a FEN string (placement and active color).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_board(
            Board::from_rows(parsed.placement),
            parsed.active_color,
        ))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the applied moves, oldest first.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Returns the number of half-moves (plies) applied.
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// Returns the board as a "placement color" FEN string.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.side_to_move.to_fen_char())
    }

    /// Returns every pseudo-legal move for the side to move.
    ///
    /// Moves that leave the mover's own king capturable are included.
    pub fn valid_moves(&self) -> MoveList {
        let moves = generate_moves(&self.board, self.side_to_move);
        debug!(side = %self.side_to_move, count = moves.len(), "generated moves");
        moves
    }

    /// Finds the generated move matching coordinate notation such as "e2e4".
    pub fn find_move(&self, notation: &str) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|m| m.notation().eq_ignore_ascii_case(notation))
    }

    /// Applies a move.
    ///
    /// The move is trusted: it should come from [`GameState::valid_moves`]
    /// for the current state. No legality check is made here.
    pub fn make_move(&mut self, m: Move) {
        trace!(mv = %m, side = %self.side_to_move, "make move");
        self.board.clear(m.from());
        self.board.put(m.to(), m.piece_moved());
        self.move_log.push(m);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverts the last applied move and returns it.
    ///
    /// Returns `None`, leaving the state untouched, when no move has been
    /// applied.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.move_log.pop()?;
        trace!(mv = %m, "undo move");
        self.board.put(m.from(), m.piece_moved());
        self.board.set(m.to(), m.piece_captured());
        self.side_to_move = self.side_to_move.opposite();
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, Square};

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn initial_move_counts() {
        let mut game = GameState::new();
        let moves = game.valid_moves();
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|m| m.piece_moved().kind == PieceKind::Pawn)
            .count();
        let knight_moves = moves
            .iter()
            .filter(|m| m.piece_moved().kind == PieceKind::Knight)
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);

        game.make_move(game.find_move("e2e4").unwrap());
        assert_eq!(game.valid_moves().len(), 20);
    }

    #[test]
    fn make_move_updates_board_and_turn() {
        let mut game = GameState::new();
        let m = game.find_move("g1f3").unwrap();
        game.make_move(m);

        assert!(game.board().is_empty(Square::new(7, 6)));
        assert_eq!(
            game.board().get(Square::new(5, 5)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.move_log(), &[m]);
    }

    #[test]
    fn undo_restores_capture() {
        let mut game = GameState::from_fen("8/8/8/3p4/4P3/8/8/8 w").unwrap();
        let before = game.clone();

        let capture = game.find_move("e4d5").unwrap();
        assert!(capture.is_capture());
        game.make_move(capture);
        assert_eq!(game.board().occupied(), 1);

        assert_eq!(game.undo_move(), Some(capture));
        assert_eq!(game, before);
        assert_eq!(
            game.board().get(Square::new(3, 3)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn undo_on_empty_log_is_noop() {
        let mut game = GameState::new();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn undo_chain_is_lifo() {
        let mut game = GameState::new();
        let start = game.clone();

        for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
            let m = game.find_move(notation).unwrap();
            game.make_move(m);
        }
        assert_eq!(game.ply_count(), 5);
        assert_eq!(game.side_to_move(), Color::Black);

        let undone: Vec<String> = std::iter::from_fn(|| game.undo_move())
            .map(|m| m.notation())
            .collect();
        assert_eq!(undone, vec!["f1b5", "b8c6", "g1f3", "e7e5", "e2e4"]);
        assert_eq!(game, start);
    }

    #[test]
    fn clicked_move_is_matched_against_generated_moves() {
        let game = GameState::new();
        let moves = game.valid_moves();

        let clicked = Move::from_coords((6, 4), (4, 4), game.board()).unwrap();
        assert!(moves.contains(&clicked));
        assert_eq!(clicked.notation(), "e2e4");

        let clicked = Move::from_coords((7, 0), (5, 0), game.board()).unwrap();
        assert!(!moves.contains(&clicked));
    }

    #[test]
    fn from_fen_side_to_move() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/4K3 b");
        assert!(game
            .valid_moves()
            .iter()
            .all(|m| m.piece_moved().color == Color::Black));
    }

    #[test]
    fn find_move_is_case_insensitive() {
        let game = GameState::new();
        assert!(game.find_move("E2E4").is_some());
        assert!(game.find_move("e2e5").is_none());
    }
}
