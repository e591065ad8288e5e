//! Move execution with snapshot rollback.
//!
//! `make_move_in_place` mutates the position and hands back the `UndoState`
//! taken beforehand. A move that leaves the mover's king attacked is rolled
//! back before returning `None`, so callers only ever see legal results.

use crate::game_state::chess_rules::CASTLING_RIGHTS_MASKS;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_checks::is_king_in_check;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_offsets::pawn_push_offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Apply any move and validate it.
    AllMoves,
    /// Reject non-captures untouched; used by quiescence.
    CapturesOnly,
}

/// Apply `mv` to `game_state`.
///
/// Returns the pre-move snapshot when the move is legal. Returns `None` and
/// leaves `game_state` exactly as it was when the move is illegal or, in
/// `CapturesOnly` mode, not a capture.
pub fn make_move_in_place(
    game_state: &mut GameState,
    mv: ChessMove,
    mode: MoveMode,
) -> Option<UndoState> {
    if mode == MoveMode::CapturesOnly && !mv.is_capture() {
        return None;
    }

    let undo = UndoState::capture(game_state);
    let mover = game_state.side_to_move;
    let moving = game_state.board[mv.from as usize]?;

    game_state.board[mv.to as usize] = Some(mv.promotion.unwrap_or(moving));
    game_state.board[mv.from as usize] = None;

    if mv.is_en_passant() {
        // The captured pawn sits one step behind the target.
        if let Some(victim) = offset_square(mv.to, -pawn_push_offset(mover)) {
            game_state.board[victim as usize] = None;
        }
    }

    game_state.en_passant_square = None;
    if mv.is_double_pawn_push() {
        game_state.en_passant_square = offset_square(mv.to, -pawn_push_offset(mover));
    }

    if mv.is_castling() {
        let rook_path = match mv.to {
            G1 => Some((H1, F1)),
            C1 => Some((A1, D1)),
            G8 => Some((H8, F8)),
            C8 => Some((A8, D8)),
            _ => None,
        };
        if let Some((rook_from, rook_to)) = rook_path {
            game_state.board[rook_to as usize] = game_state.board[rook_from as usize].take();
        }
    }

    if moving.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.to;
    }

    game_state.castling_rights &= CASTLING_RIGHTS_MASKS[mv.from as usize];
    game_state.castling_rights &= CASTLING_RIGHTS_MASKS[mv.to as usize];

    game_state.side_to_move = mover.opposite();

    if is_king_in_check(game_state, mover) {
        undo.restore(game_state);
        return None;
    }

    Some(undo)
}

/// Restore the position saved by a successful `make_move_in_place`.
#[inline]
pub fn unmake_move_in_place(game_state: &mut GameState, undo: &UndoState) {
    undo.restore(game_state);
}

/// Position after `mv`, or `None` if the move is illegal.
pub fn apply_move(game_state: &GameState, mv: ChessMove) -> Option<GameState> {
    let mut next = game_state.clone();
    make_move_in_place(&mut next, mv, MoveMode::AllMoves)?;
    Some(next)
}
