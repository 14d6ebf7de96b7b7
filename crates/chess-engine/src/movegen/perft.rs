//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the move tree at a given depth. Here the
//! tree is built from pseudo-legal moves and walked with make/undo on a
//! single [`GameState`], so it also exercises undo.

use crate::GameState;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(state: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.valid_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        state.make_move(m);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(state: &mut GameState, depth: u32) -> Vec<(String, u64)> {
    let moves = state.valid_moves();
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        state.make_move(m);
        let nodes = if depth > 1 {
            perft(state, depth - 1)
        } else {
            1
        };
        state.undo_move();
        results.push((m.notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // No check can arise in the first three plies, so these match the
    // well-known legal counts.
    #[test]
    fn perft_startpos_depth_1() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 3), 8902);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn perft_depth_0() {
        let mut state = GameState::new();
        assert_eq!(perft(&mut state, 0), 1);
    }

    #[test]
    fn perft_divide_startpos() {
        let mut state = GameState::new();
        let results = perft_divide(&mut state, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(results[0].0, "a2a3");
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
