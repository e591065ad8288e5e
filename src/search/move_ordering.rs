//! Move ranking for alpha-beta.
//!
//! Highest first: the principal-variation move, captures by MVV-LVA, the two
//! killer slots, then quiet moves by history plus a target-square bonus.

use crate::game_state::chess_types::{GameState, PieceKind};
use crate::moves::move_descriptions::ChessMove;
use crate::search::search_heuristics::SearchHeuristics;
use crate::tables::mvv_lva::mvv_lva_score;
use crate::tables::piece_square_tables::{table_index, KNIGHT_TABLE};

pub const PV_MOVE_SCORE: i32 = 20_000;
pub const CAPTURE_BASE_SCORE: i32 = 10_000;
pub const FIRST_KILLER_SCORE: i32 = 9_000;
pub const SECOND_KILLER_SCORE: i32 = 8_000;

pub fn score_move(
    game_state: &GameState,
    heuristics: &SearchHeuristics,
    ply: usize,
    mv: ChessMove,
) -> i32 {
    let packed = mv.pack();
    if packed == heuristics.pv_move_at(ply) {
        return PV_MOVE_SCORE;
    }

    let Some(mover) = game_state.piece_at(mv.from) else {
        return 0;
    };

    if mv.is_capture() {
        // En passant lands on an empty square; the victim is still a pawn.
        let victim = game_state
            .piece_at(mv.to)
            .map_or(PieceKind::Pawn, |piece| piece.kind);
        return CAPTURE_BASE_SCORE + mvv_lva_score(mover.kind, victim);
    }

    let killers = heuristics.killers_at(ply);
    if packed == killers[0] {
        FIRST_KILLER_SCORE
    } else if packed == killers[1] {
        SECOND_KILLER_SCORE
    } else {
        heuristics.history_score(mover, mv.to) + KNIGHT_TABLE[table_index(mover.color, mv.to)]
    }
}

/// Swap the best-scoring move in `moves[index..]` into `moves[index]`.
///
/// Scores are recomputed on every call, so tables updated while earlier
/// siblings were searched affect the order of the remaining ones.
pub fn pick_next_move(
    moves: &mut [ChessMove],
    index: usize,
    game_state: &GameState,
    heuristics: &SearchHeuristics,
    ply: usize,
) {
    let mut best_index = index;
    let mut best_score = i32::MIN;
    for (offset, mv) in moves.iter().enumerate().skip(index) {
        let score = score_move(game_state, heuristics, ply, *mv);
        if score > best_score {
            best_score = score;
            best_index = offset;
        }
    }
    moves.swap(index, best_index);
}
