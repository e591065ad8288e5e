//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`, so heuristics can be
//! swapped without touching the search loop. Scores are always from the
//! side to move's perspective.

use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::{material_value, positional_value};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material plus per-piece positional tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let light_minus_dark = board_squares()
            .filter_map(|sq| game_state.piece_at(sq).map(|piece| (sq, piece)))
            .map(|(sq, piece)| {
                let value = material_value(piece.kind) + positional_value(piece, sq);
                match piece.color {
                    Color::Light => value,
                    Color::Dark => -value,
                }
            })
            .sum::<i32>();

        side_relative(game_state.side_to_move, light_minus_dark)
    }
}

#[inline]
fn side_relative(side: Color, light_minus_dark: i32) -> i32 {
    match side {
        Color::Light => light_minus_dark,
        Color::Dark => -light_minus_dark,
    }
}
