use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, MoveList, FLAG_CAPTURE};
use crate::moves::move_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut MoveList) {
    generate_step_moves(game_state, from, &KNIGHT_OFFSETS, out);
}

/// One move per offset whose target is on the board and not friendly.
pub(crate) fn generate_step_moves(
    game_state: &GameState,
    from: Square,
    offsets: &[i8],
    out: &mut MoveList,
) {
    let side = game_state.side_to_move;
    for offset in offsets {
        let Some(to) = offset_square(from, *offset) else {
            continue;
        };

        match game_state.piece_at(to) {
            None => out.push(ChessMove::new(from, to, 0)),
            Some(piece) if piece.color != side => {
                out.push(ChessMove::new(from, to, FLAG_CAPTURE))
            }
            Some(_) => {}
        }
    }
}
