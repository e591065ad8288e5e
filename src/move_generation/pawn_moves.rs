use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{
    ChessMove, MoveList, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};
use crate::moves::move_offsets::{
    is_pawn_start_rank, is_pre_promotion_rank, pawn_capture_offsets, pawn_push_offset,
};

/// Pawn pushes, double pushes, captures, en passant and promotions from `from`.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    let side = game_state.side_to_move;
    let promotes = is_pre_promotion_rank(side, from);
    let push = pawn_push_offset(side);

    if let Some(to) = offset_square(from, push) {
        if game_state.is_empty(to) {
            if promotes {
                push_promotions(side, from, to, 0, out);
            } else {
                out.push(ChessMove::new(from, to, 0));

                if is_pawn_start_rank(side, from) {
                    if let Some(double) = offset_square(to, push) {
                        if game_state.is_empty(double) {
                            out.push(ChessMove::new(from, double, FLAG_DOUBLE_PAWN_PUSH));
                        }
                    }
                }
            }
        }
    }

    for offset in pawn_capture_offsets(side) {
        let Some(to) = offset_square(from, offset) else {
            continue;
        };

        if game_state.is_occupied_by(to, side.opposite()) {
            if promotes {
                push_promotions(side, from, to, FLAG_CAPTURE, out);
            } else {
                out.push(ChessMove::new(from, to, FLAG_CAPTURE));
            }
        } else if game_state.en_passant_square == Some(to) {
            out.push(ChessMove::new(from, to, FLAG_CAPTURE | FLAG_EN_PASSANT));
        }
    }
}

fn push_promotions(side: Color, from: Square, to: Square, flags: u8, out: &mut MoveList) {
    for kind in PROMOTION_KINDS {
        out.push(ChessMove::with_promotion(from, to, Piece::new(side, kind), flags));
    }
}
