//! Exhaustive move-path enumeration for generator validation.
//!
//! Walks every legal line to a fixed depth with make/unmake on a single
//! position and tallies leaf statistics, so counts can be compared against
//! published reference tables.

use crate::game_state::chess_types::GameState;
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::move_apply::{make_move_in_place, unmake_move_in_place, MoveMode};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::move_descriptions::ChessMove;

/// Leaf statistics; every field except `nodes` counts the move reaching the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: ChessMove, game_after: &GameState) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling() {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        if is_king_in_check(game_after, game_after.side_to_move) {
            self.checks += 1;
        }
    }
}

/// Count legal move paths of exactly `depth` plies.
///
/// `game_state` is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u32) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Node count below each legal root move.
pub fn perft_divide(game_state: &mut GameState, depth: u32) -> Vec<(ChessMove, u64)> {
    let mut divided = Vec::new();
    if depth == 0 {
        return divided;
    }

    for mv in generate_moves(game_state) {
        let Some(undo) = make_move_in_place(game_state, mv, MoveMode::AllMoves) else {
            continue;
        };
        divided.push((mv, perft(game_state, depth - 1).nodes));
        unmake_move_in_place(game_state, &undo);
    }

    divided
}

fn perft_recurse(game_state: &mut GameState, depth: u32, counts: &mut PerftCounts) {
    for mv in generate_moves(game_state) {
        let Some(undo) = make_move_in_place(game_state, mv, MoveMode::AllMoves) else {
            continue;
        };

        if depth == 1 {
            counts.record_leaf(mv, game_state);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }

        unmake_move_in_place(game_state, &undo);
    }
}
